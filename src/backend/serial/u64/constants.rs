// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.
//! This module contains backend-specific constant values: the curve
//! coefficients, the GLS endomorphism and decomposition constants, and
//! the precomputed generator tables.
//!
//! The tables are reproducible offline from the generator and the comb
//! parameters; the byte layout (four little-endian `u64` limbs for `x`
//! followed by four for `y`, per point) is part of the crate's
//! interface contract.

use crate::edwards::AffinePoint;
#[cfg(feature = "precomputed-tables")]
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;
use crate::scalar::Scalar;
#[cfg(feature = "precomputed-tables")]
use crate::window::{CombLookupTable, CombLookupTableWide};

/// The Edwards curve constant `d = 109*(2+i)`.
pub(crate) const EDWARDS_D: FieldElement = FieldElement::from_limbs([
    0x00000000000000da, 0x0000000000000000,
    0x000000000000006d, 0x0000000000000000,
]);

/// The Edwards curve constant `a = -(2+i)`.
pub(crate) const EDWARDS_A: FieldElement = FieldElement::from_limbs([
    0xfffffffffffffffd, 0x7fffffffffffffff,
    0xfffffffffffffffe, 0x7fffffffffffffff,
]);

/// Scale constant of the GLS morphism: psi(x, y) = (W * conj(x), conj(y)).
pub(crate) const GLS_W: FieldElement = FieldElement::from_limbs([
    0x695ab4d883de0b89, 0x59f30c694ed33218,
    0xd2b569b107bc1713, 0x33e618d29da66430,
]);

/// `BASEPOINT_ORDER` is the order `q` of the prime-order subgroup.
pub(crate) const BASEPOINT_ORDER: Scalar = Scalar {
    limbs: [0xce9b68e3b09e01a5, 0xa6261414c0dc87d3, 0xffffffffffffffff, 0x0fffffffffffffff],
};

/// `(q - 1) / 2`, the rounding offset of the division by `q`.
pub(crate) const HALF_Q: [u64; 4] = [0xe74db471d84f00d2, 0xd3130a0a606e43e9, 0xffffffffffffffff, 0x07ffffffffffffff];

/// `R0 = 2^252 - q`, the (negated) tail of the subgroup order.
pub(crate) const R0: u128 = 0x59d9ebeb3f23782c3164971c4f61fe5b;

/// Lattice constants of the decomposition: `q = S^2 + T^2` and
/// `lambda = S / T (mod q)`.
pub(crate) const GLS_S: u128 = 0x3fffffffffffffffffffffffffffffff;
pub(crate) const GLS_T: u128 = 0x000000000000000062d2cf00a287a526;

/// The curve generator (order `q`).
pub(crate) const GENERATOR: AffinePoint = AffinePoint {
    x: FieldElement::from_limbs([
        0x000000000000000f, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ]),
    y: FieldElement::from_limbs([
        0x36d073dade2014ab, 0x7869c919dd649b4c,
        0xdd9869fe923191b0, 0x6e848b46758ba443,
    ]),
};

/// Comb table 0 for fixed-base multiplication: entry `u` holds
/// `(1 + sum_j u_j*2^(36*j)) * G` for the 6-bit pattern `u`.
#[cfg(feature = "precomputed-tables")]
pub(crate) const GEN_TABLE_0: CombLookupTable = CombLookupTable([
    AffinePoint {
        x: FieldElement::from_limbs([
            0x000000000000000f, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]),
        y: FieldElement::from_limbs([
            0x36d073dade2014ab, 0x7869c919dd649b4c,
            0xdd9869fe923191b0, 0x6e848b46758ba443,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xc0257189412dee27, 0x22d1b2a099cef701,
            0x467a15261c3e929d, 0x7fede0e4cf68d988,
        ]),
        y: FieldElement::from_limbs([
            0x80c3dc5f34ad2f0c, 0x6e4c44e71fab5f84,
            0x9cae3727bb435cbc, 0x267325c8944698f8,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xa9f3f1342d5833fa, 0x0d713d9ca10dbf27,
            0x22c52394537fef93, 0x30e11fa9329422ae,
        ]),
        y: FieldElement::from_limbs([
            0x3396304477e71d78, 0x239b72e696b1d33e,
            0x91fd62721ceb91e4, 0x57f6acba2654f846,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xb347fe4dd0630434, 0x1ee77493a307590d,
            0x727d670b78421fe2, 0x44c3c273df251de0,
        ]),
        y: FieldElement::from_limbs([
            0x071dbad492800594, 0x1f410b55ab343b26,
            0xc7a2de19aca789e4, 0x32249d176df691b7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x702fde8b105e4ce4, 0x2f2baec7f8ee114e,
            0x760e745252b16b6a, 0x3a8e355a529d5777,
        ]),
        y: FieldElement::from_limbs([
            0xf0445c7cac272c35, 0x66c1b4456dcb384d,
            0x093f3e6fcb4ff83d, 0x1d7e4261a44beae7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x0fcc9d435a689819, 0x032b55195f81677f,
            0x21a5c3fd80210baf, 0x43e6cd7ebde1a73c,
        ]),
        y: FieldElement::from_limbs([
            0x2664512b4f034b84, 0x224555423e27897b,
            0xf66b3e82fa8172ca, 0x418c43ba2b2c2cdf,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xc8e0a154289d7217, 0x03ccb4f21c7535ea,
            0x00ad62d02a33d27d, 0x64f28d58eb112c20,
        ]),
        y: FieldElement::from_limbs([
            0xc641aabb08f81e8c, 0x19b6ac02e86a4a74,
            0x3240fe9b5cfbb25f, 0x1c5ae3311fe73f52,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1a2d06c48ec87eb7, 0x595f030c63cb9f75,
            0x7e4ce069d0252eaa, 0x2b67e2850665113f,
        ]),
        y: FieldElement::from_limbs([
            0x53797417644d38b1, 0x5c6cc0fad0961f35,
            0x1c47ce3bd26bfb69, 0x509ac971615a6490,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x295d3d0793cf7f92, 0x0babf7b7af2c6f03,
            0xd9377d2d2348d740, 0x142f89c3f50f2c78,
        ]),
        y: FieldElement::from_limbs([
            0x4464af962886f51f, 0x5a1be0fb7b7c812b,
            0x8b1ab6e5cd7f2580, 0x7ec25fb8091eb2d7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x71fdf4c1d2ba8567, 0x0d2419ec9fbb0a5e,
            0xa35fbd6da89f2d58, 0x45d65de885459b51,
        ]),
        y: FieldElement::from_limbs([
            0x6778ad3327edb696, 0x643d770deacc423c,
            0xa6063f6c5f992e06, 0x0de1e55a4477e352,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xd3df4250a4383b1b, 0x3e653721ff649bcb,
            0x27cbfed7de7c7680, 0x7508840bbc9a54a8,
        ]),
        y: FieldElement::from_limbs([
            0x43e0480759ef1863, 0x5e686fff9f8e00e9,
            0x62cc9dd5496d699e, 0x3dcbb84cc5aaf8f5,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x36e276fd00d1ca18, 0x733097fdcac089b4,
            0x39a3d9e200c064e1, 0x22c9e1ea50815782,
        ]),
        y: FieldElement::from_limbs([
            0x0a3f0cf3ef55059c, 0x0b1213397520fde9,
            0x37cc47b2242bb840, 0x3c56d498f324daba,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x911c26d3a8883f7e, 0x16bfdb623a597dc2,
            0xc50f51345a072322, 0x3417853e70d94a89,
        ]),
        y: FieldElement::from_limbs([
            0x3bc3895442e26a41, 0x33b83a40d4bb7db1,
            0x517160b5a3df03b8, 0x42a917d97b4053ec,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6210bdefa9e60942, 0x18a3f7cd5d63a070,
            0xf74b507ebce9e116, 0x655d223c7c63d29e,
        ]),
        y: FieldElement::from_limbs([
            0xc151db63dc28a09e, 0x678a968a262d4f9b,
            0x08f631a0b2e7f7e2, 0x756c53c36ffa9a22,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x5806b239a7a25c91, 0x2a3598349b7e9445,
            0xcff2a7dafa5261ff, 0x02b3b19360ff8ed7,
        ]),
        y: FieldElement::from_limbs([
            0xc5a7c2c977e23b2c, 0x663ce2499666bb0b,
            0x818c546442ce6eae, 0x67e824976d91a0a9,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x4ae3d06ce1eb701a, 0x2854f7079b7d5748,
            0x802442310d72f39c, 0x3907695186210ce2,
        ]),
        y: FieldElement::from_limbs([
            0x4ec6a01caa4ae626, 0x72974ed5a942147a,
            0x9a0018c3383f57af, 0x60cd656b6ba43c86,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x5f106965ad6f60a0, 0x1af09f2d0d29b7cf,
            0x4eeeb180862ee54b, 0x47386eeef34f656a,
        ]),
        y: FieldElement::from_limbs([
            0x596a47a1bd9420a0, 0x5611e38366cc1796,
            0x8df59d3e0fb621a6, 0x5c2c1a8adc8cefe4,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xac1b40c5812e7e50, 0x2da0c7d73d2bc48d,
            0x08196f6c795a08fd, 0x4c35cdddb6dbe1d3,
        ]),
        y: FieldElement::from_limbs([
            0x1307f06bd01dbdf8, 0x2dd307afe4eb1180,
            0x1cc1a30f8d09f72c, 0x18c6880d3e28ccbe,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x364615ea188011bd, 0x7aeaf3cc1abb3e3e,
            0x6394782e5bc5622e, 0x141ca3afb157e79b,
        ]),
        y: FieldElement::from_limbs([
            0x26b300fa6f9694c9, 0x164c54f0a51f3461,
            0x25ff971129485dae, 0x093318c3594df963,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xe5b0becdd878685a, 0x0a7e933ae9ce3901,
            0xfbd70a101b589de0, 0x6c360d48ead2a288,
        ]),
        y: FieldElement::from_limbs([
            0x7d1a934336045c3a, 0x09971e128d3171bb,
            0x897d16e25e23642b, 0x0073c833238aeb43,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x246157b0c59feebc, 0x23930effceea42c2,
            0x1bc25fa6a2f2f87e, 0x043947bd545272a7,
        ]),
        y: FieldElement::from_limbs([
            0x6c8164b134ce465a, 0x56289db00b3b0c66,
            0xd0b82225bbca8cc2, 0x01062e75b29735fd,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x486e795e1d05003e, 0x34f26d8bc540d798,
            0xe7d4505bd374e859, 0x4cb88344c6aa3fc9,
        ]),
        y: FieldElement::from_limbs([
            0xd006937fe8bb1e38, 0x3707c25a597409de,
            0x54d647a4e6cbd93a, 0x29f7ed8512e88d6e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xa2cba8a959900fd7, 0x40eff4737e8f8c5a,
            0xfd2fe210d5834093, 0x525ff5c59d47781c,
        ]),
        y: FieldElement::from_limbs([
            0x6902367b210b2b7d, 0x346607a6772cb7a2,
            0x63a67723039f88d8, 0x5003b4c2c8aec14c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x8c3096cd19cee08a, 0x56a2eee216afee7c,
            0x03216c87f26d4ef8, 0x15cf73352d1dd930,
        ]),
        y: FieldElement::from_limbs([
            0x2091167afcec33b1, 0x3232e1e814579132,
            0x3d894716a60d8c9d, 0x1dbd947433a7a0e7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x04b962708f50de47, 0x3f263060999561b5,
            0x445dfa684afb8065, 0x7e6a41f05025964f,
        ]),
        y: FieldElement::from_limbs([
            0xcc515fdc2a996772, 0x1688acc005473d04,
            0x40fed523adfbcaa6, 0x4dd6f0927c227f04,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6bee658a504ee8ea, 0x513913762537c16f,
            0x53ea13bf8ba872d3, 0x68828ca3919a38fe,
        ]),
        y: FieldElement::from_limbs([
            0x6ab1c4ee45ea88c1, 0x4896ace7baa4cebe,
            0xb4b7f7a2a881e8db, 0x7ce43c96aab0dda1,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3fec69619bea6715, 0x24fa602b2557cc66,
            0x23d372f8d0ebb104, 0x457c1c459b303607,
        ]),
        y: FieldElement::from_limbs([
            0xd3abbf07b7e02e58, 0x68272102076b41ec,
            0x2bbdf1128f5664d0, 0x1d785e2044f12961,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xb09afc08021f628d, 0x2e7e413d1a1fcef8,
            0x7f7c56c95a973b7a, 0x0d71e67e44450257,
        ]),
        y: FieldElement::from_limbs([
            0xba7327cb15529951, 0x233a365f8c8672ac,
            0xd632b507b8b60244, 0x0f0e3cdf4a2be9d7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x0d7f49c0568a14dd, 0x77d025da314730c4,
            0x33e0211742a1e9e7, 0x05e0bd8f665266c0,
        ]),
        y: FieldElement::from_limbs([
            0x9aebd2f4e21c94d7, 0x6109a0940c5eb2cd,
            0x9898f59fdd049337, 0x7a92437a9d34e47f,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1a3f3fc106fab9aa, 0x1162b24aea2bb259,
            0xc86a152f06d72a17, 0x23ff651ea14fdae0,
        ]),
        y: FieldElement::from_limbs([
            0x653345ff325fccbd, 0x5281ac6e0f951094,
            0x828345c207be1aa0, 0x61f1e49006f0931f,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3441260df3f8b144, 0x548d223dbe1d9e0f,
            0x72caf061bd8627bd, 0x47171b3562ee4904,
        ]),
        y: FieldElement::from_limbs([
            0x17316a6b40d4b41f, 0x6f9f888cdffc867b,
            0x98701eeaebfb1fe2, 0x031dc9ce075edeb8,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x930e9a214b9702c5, 0x5020f7c88a9824a0,
            0xb3ba00b6a8adafb1, 0x3c9f65e1cb75faf6,
        ]),
        y: FieldElement::from_limbs([
            0xe44d2f3170ef5656, 0x7c299a1469a9914d,
            0xc789162aa130c444, 0x17231bc28109a8a7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x30ef872e95d24514, 0x0dfed31c326eae5d,
            0x44bb63cdfb557ba6, 0x04eb5a67b005cf9b,
        ]),
        y: FieldElement::from_limbs([
            0xf22a5d5ac0caa911, 0x3af1e63ab024c9ad,
            0x6e3dc0129da1c801, 0x5baf6ff456cb9eaa,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x4a876845e49569e7, 0x5ff482757569fd03,
            0x97f81cc920a15d6e, 0x2129cdd20dbd7c16,
        ]),
        y: FieldElement::from_limbs([
            0x2dcf87aa21fbe49a, 0x6380875efd5f8109,
            0x91cbf5dfd289baeb, 0x7023b5752169a9f3,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x437b07ce27e83414, 0x564477b46dcd4b58,
            0x733501b4e86df5ed, 0x2d10b6e6ac4fdb5e,
        ]),
        y: FieldElement::from_limbs([
            0x30f72802d52080f1, 0x31f4c1ae0e5de530,
            0xc5cc440ce3ab3f8d, 0x24b2985ee52e1db3,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xe3ac866d05b6dbde, 0x09067409d858f0c7,
            0xa3cdcd75f3185a05, 0x4c7e53bcb7a628ee,
        ]),
        y: FieldElement::from_limbs([
            0xb5ace6dedb4a7aa0, 0x72bf61550b543a0b,
            0x6b8ab274e3819481, 0x3270a9b473a4b39a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xfe1d27507a349721, 0x2982e0f0d3a8b8b4,
            0x1241af4ae9097d39, 0x3fd5a48fb7587d9d,
        ]),
        y: FieldElement::from_limbs([
            0xf92698a6783441e4, 0x5702658d0b633edb,
            0x775b17930625c4db, 0x3d50c2741ad6994c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf62e147e3ddc8839, 0x6f5ee2ee4fbabba3,
            0xf653ea49e73b6ddb, 0x0d7c156b3b8e4632,
        ]),
        y: FieldElement::from_limbs([
            0xab9968641bede913, 0x65612ae285605a55,
            0xb55f409d704d4b0f, 0x0edc676e75904abf,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x2642c2ef9bb133bc, 0x3ff7e35a91fed47b,
            0xc538cc397073664e, 0x4b5fa53465648b9d,
        ]),
        y: FieldElement::from_limbs([
            0x49bb424e69be2b71, 0x1b40d6a429c3551e,
            0xef221689409f26d1, 0x550e086b5faa72d0,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xe288e24060619719, 0x535e665982eea560,
            0x3d29ea146dee8c76, 0x2bac0b4d685553b2,
        ]),
        y: FieldElement::from_limbs([
            0x4689025977b93c68, 0x7ffb5f13237fb487,
            0xf110f755b5d7e60f, 0x75a9fa382f80e1c3,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xdd24fecc0003fb77, 0x0e2ab2b459162987,
            0xe1f963c251317e8b, 0x472c71a54a0f1253,
        ]),
        y: FieldElement::from_limbs([
            0x89cd7034b6affe91, 0x67e746104adfcce5,
            0xc2478f6a41abaf49, 0x5aece0c950f52ef0,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xde902f7206c44e1d, 0x4cf2372eb9554572,
            0x479454efe51c176d, 0x791a45d552b9aef8,
        ]),
        y: FieldElement::from_limbs([
            0x95be244ebd66a248, 0x2a266a5026ff8222,
            0xe21babaa64e4bb27, 0x1b3ae0acb6708d8a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x82db122e4267d7c8, 0x64b807e95e432be1,
            0xa72698ad20d12093, 0x1956b8809ebf8e7e,
        ]),
        y: FieldElement::from_limbs([
            0x81ca7e5bfd4518bc, 0x52d3e0c1f5c74e06,
            0x4fdd44ad83241d94, 0x415e5370dee0de68,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x13cee309d6c6c382, 0x7416758ee0ce6007,
            0x7fee9ccb99be2937, 0x2141ed2927414c7c,
        ]),
        y: FieldElement::from_limbs([
            0xf2c17817d46767bb, 0x5dbfd5c348373e00,
            0x90dea6fdcb52f8cb, 0x768f7a9a80b829d6,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xd0c41d3cc65cbdd8, 0x6aa2d5f7b8d6f2d7,
            0x170cd847ae7b9d96, 0x38152096e221a4b9,
        ]),
        y: FieldElement::from_limbs([
            0x8f0af4d84d265b5b, 0x03351f6efbde387c,
            0x945253d626cf92f2, 0x54b5e94e4c61e7d6,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xd3422d930825d1ea, 0x497693cb9fa948e8,
            0xbb05949623ade10c, 0x394a41da3c0b7486,
        ]),
        y: FieldElement::from_limbs([
            0xe2c024091da70f74, 0x49177244e286a068,
            0xd7c9cf6a67342420, 0x69a9559ee5c9fada,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x95dc8c05bb291750, 0x76a68ea95f5d0a12,
            0x5cde0ad22eb36106, 0x59d5e909e376ace8,
        ]),
        y: FieldElement::from_limbs([
            0xd731dc9810733bcf, 0x1bea3e18c7d34d51,
            0x5e9a6a6f5f0810d0, 0x381bb194ae27fc62,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x36f36daab1b6b4f0, 0x19c7af84e22ad8b3,
            0xd108569802551089, 0x7a91139ed69126e6,
        ]),
        y: FieldElement::from_limbs([
            0x7bfe7e764fcacf33, 0x12752cec29ae1911,
            0x54c62c48fa6d61d6, 0x1284440b7251a832,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x751ce0f9715bd48a, 0x698a5f1bb64b3577,
            0x9c3c0d016fa0863a, 0x345d6e089e97335b,
        ]),
        y: FieldElement::from_limbs([
            0x087ccfa8cb18a5a6, 0x774a7e21bc215eeb,
            0x90b6a8646c442017, 0x31d57460cfc3941e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x2dd191a58de3b4ba, 0x5345b68da23f81a2,
            0xf075fc49eacde157, 0x05314b7c72c0a9a4,
        ]),
        y: FieldElement::from_limbs([
            0xe5fe1a78d70d2dcf, 0x381d770736bc8c76,
            0xc45ec4ce181a0c1e, 0x719372b475a88276,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x32669d1b43955991, 0x507d12301b156163,
            0x3ee473094a9388ae, 0x1489ffddf00e5acc,
        ]),
        y: FieldElement::from_limbs([
            0x0eacdf08b0abcd47, 0x24f9e5c86770729b,
            0xc454cec42a855819, 0x1e7e64a61f5be321,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x26d918c1e14f8bdb, 0x501c21920449ce1c,
            0x0929fbe253f7b47b, 0x5340a855a1b28ff0,
        ]),
        y: FieldElement::from_limbs([
            0x32c2e8ffe93ab96e, 0x28cdfcd42fb83c9a,
            0xba7b1700fc6fe4af, 0x79cf20a01f81fad3,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xe55c8ce629e337f1, 0x16d504f0cf1d39d3,
            0x8010c256bf096934, 0x3e0476f55818626d,
        ]),
        y: FieldElement::from_limbs([
            0xe49a15bc222e4db7, 0x7f4ab95d62e98495,
            0xcfba4ea5fd040ce1, 0x54c78e507221cd07,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x7bd6617b34bd085a, 0x53cd5e2334690530,
            0x2f617d73b17c1f54, 0x306d3238a20027b2,
        ]),
        y: FieldElement::from_limbs([
            0xbd0c4079305199fc, 0x0e5c92724d5703c2,
            0x2dfe353d1f52d4fb, 0x43300b1ac6159594,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x451a5fa7a52f6bab, 0x4ab437ad7436a97f,
            0xcb53118447289394, 0x476d4525367d3569,
        ]),
        y: FieldElement::from_limbs([
            0x3123393aa3c3f3da, 0x7ea9fc46e48cbc6b,
            0xcac437e951250201, 0x4a20f85babe97435,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1848eb2ffd8991da, 0x739f89a48326f3ef,
            0x1b18bf4816a4175a, 0x4f58e466f6f071fa,
        ]),
        y: FieldElement::from_limbs([
            0x7c02bb5166f7eed9, 0x1aee39c9c6aa33cf,
            0xe11b0f369b83ee69, 0x2e8dd73ca132525c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x00689c5fd82d5e4e, 0x0ed67cffbec9eb55,
            0xe2cfde41564d3cf9, 0x160c66753834549f,
        ]),
        y: FieldElement::from_limbs([
            0x18f930d812226a38, 0x35d3795b2b557bdb,
            0xac4bfb8b3184108f, 0x157c9971868d8149,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1bd2312a229996c9, 0x744c1d176074650d,
            0x4db58f0f76d8ca31, 0x60f9edc54ec9c7b8,
        ]),
        y: FieldElement::from_limbs([
            0x8cfdd8d6009a9b7a, 0x32450fbb8a180bd7,
            0xd2fc1508a2cb99a4, 0x09a2e1c06b660f30,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x0fd9d641912fca23, 0x1dc31e45241b661d,
            0x6a2d8ac2a7611674, 0x1c3bb9d4a1f988ed,
        ]),
        y: FieldElement::from_limbs([
            0x975181cd1d995b51, 0x23cf4a66dcdafff9,
            0x1d362b58213e65f0, 0x1e8d4ce3e669c524,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xe7edba73c655b444, 0x5062192274ad6166,
            0xb932a0ab5afd6172, 0x6cc1e7fabf0fbeba,
        ]),
        y: FieldElement::from_limbs([
            0x8e10f6541914e4a5, 0x2a7ecde3da40e6fc,
            0x97765c1f4c72cb9b, 0x0e87b21364d1a6fd,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x86ce9280fe978f8f, 0x70333a1d4f0a4356,
            0xe2d52f4ab352c207, 0x71bd9ad14b825641,
        ]),
        y: FieldElement::from_limbs([
            0xc07cd01ba84c0dbc, 0x5b985c2efb6220ea,
            0xa33f05d9a466b62f, 0x38632d9a068a5f1a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf34f1b39fc9df81f, 0x370dfab03212a848,
            0x69507ffce5d22a6a, 0x0c4a9be92549827c,
        ]),
        y: FieldElement::from_limbs([
            0x8a9c0a8edc315ee3, 0x711000b92783d8fe,
            0x6cc798d4abd96caf, 0x7c0859be24e8df18,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x75b300f8eebaec75, 0x28ea828c8680d217,
            0xec015bcfd5baa936, 0x3c1e96f916201885,
        ]),
        y: FieldElement::from_limbs([
            0xebe0cf4dbd6c4569, 0x2d1040a866de1b72,
            0x8e3c4d6adfbeaa9c, 0x0dd5a2702ccb8474,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xae327cc24e1283ff, 0x5279f3e3b4640a06,
            0x2ba26dc97f8f5a5f, 0x7dde8425c91b480b,
        ]),
        y: FieldElement::from_limbs([
            0x157b4fc963038e16, 0x42906db00ec2ae4d,
            0x18c9d8660e5d4b94, 0x4e908f918f5a45e2,
        ]),
    },
]);

/// Comb table 1 for fixed-base multiplication: entry `u` holds
/// `2^18 * (1 + sum_j u_j*2^(36*j)) * G`.
#[cfg(feature = "precomputed-tables")]
pub(crate) const GEN_TABLE_1: CombLookupTable = CombLookupTable([
    AffinePoint {
        x: FieldElement::from_limbs([
            0xfad2788226688f06, 0x1924dedc82fbf455,
            0xd329997d1b3aa551, 0x497c5aae63352a0c,
        ]),
        y: FieldElement::from_limbs([
            0xc8b7075a25851bbc, 0x5fde998a13127f2c,
            0x004e2444a52f60e3, 0x7b088f6cd796e5cd,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x577bcef66fc2302d, 0x386b9be656afa536,
            0x32f5cb220f4aef1f, 0x7bfd92f87d54be21,
        ]),
        y: FieldElement::from_limbs([
            0xa14e9570f4d1116e, 0x086bd59cfe7c08f4,
            0xd2e8243f6771e8be, 0x0e3a3804a3cae6f1,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf2f5195dbc2c3363, 0x79f3637b18cfa75c,
            0xaebb2d3ada9053b6, 0x6d445340190d6947,
        ]),
        y: FieldElement::from_limbs([
            0x8030846b78811602, 0x5e29614ae17e7ad3,
            0x430e5e16d5071a8c, 0x1038bdadb1284770,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x311715d47e2dd1ff, 0x765e4d432a368674,
            0x4e9f15bb5796d8c1, 0x2fead6fc4881d3fc,
        ]),
        y: FieldElement::from_limbs([
            0x07ae4008bddbc8bc, 0x4ebe4ad4751fa048,
            0xe63e7b502293abf8, 0x2e8e8da1c0165c1c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xab705e354de0b139, 0x46aea02f39726cc5,
            0xd8ed93568e0c90fa, 0x28fdb036ff3d119a,
        ]),
        y: FieldElement::from_limbs([
            0xfaffbbb4893207c4, 0x4fe7638622edcd57,
            0x515b36ecabb359c6, 0x706a749567f5120c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x8729773630df17a6, 0x262f1c0fcf126b8a,
            0x36291313245249fd, 0x0fd41bbd375ca912,
        ]),
        y: FieldElement::from_limbs([
            0xa20ef6e8a9bec78c, 0x4c1eb58f745bd6c9,
            0xbca4a40173b7f72b, 0x380a19ef263ebfa0,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xa082b1ac77f4777e, 0x4f7a0a22a8470bcb,
            0x416af9704569a77e, 0x3573e678efe32cc4,
        ]),
        y: FieldElement::from_limbs([
            0x645bb1fdc33bb3bc, 0x2d7239d958ee13f4,
            0x27458df841e54646, 0x7707428748bc45a7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x85a57caf7f144e65, 0x64617c55f0f3c2a7,
            0x7884384ec82d51b8, 0x520fa64a49f43931,
        ]),
        y: FieldElement::from_limbs([
            0xe7dcbe03283827b5, 0x207d2b6a2c4ec0a0,
            0x17dadd10d03908bf, 0x7b85d1a7f18fe56c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6212e0b015f00ada, 0x083cdc88ce6da191,
            0xf6b96d2218942406, 0x1d814330e0e4fa5f,
        ]),
        y: FieldElement::from_limbs([
            0x628cf68a803f8f25, 0x6488f9e309311e63,
            0xf3552797f35afaa8, 0x7557c5f29e789eb2,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x94909c14c24961b5, 0x1ecb982e76a7b180,
            0xcec16dd8e997486a, 0x6b61f2ab55f86fb9,
        ]),
        y: FieldElement::from_limbs([
            0xb3b234f5825fdc73, 0x15ceb3899c4a13f9,
            0x769622e4ba2d8972, 0x0faab3a367311e8c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xec1f88ecbbbe470c, 0x34c00900873d1ad7,
            0xfb494e985c4aad69, 0x1980a140b1448043,
        ]),
        y: FieldElement::from_limbs([
            0x9e908cd6c5c50677, 0x222223dadb2150a5,
            0xdf7f3e717eba6234, 0x2debfb8767536ab8,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x9e2c439c7c319710, 0x1a5bc0ce85bf1265,
            0xb62249601a8e4c2e, 0x427c26a1c2e4587c,
        ]),
        y: FieldElement::from_limbs([
            0xadfc2450b50dabb2, 0x597094851dc7eb0d,
            0x3e7811247c37cdd7, 0x62e909e3d4335a92,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x62623e6761d1a9f2, 0x29d89d527b2b4e9b,
            0xceb2d6853abe4622, 0x7f3af22e7e59b878,
        ]),
        y: FieldElement::from_limbs([
            0x026328054619ab88, 0x55232b214e398d66,
            0x55c27a791184f592, 0x7a02bdab153aa6e5,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xbf8f6e691874f39b, 0x05770b51544ba3bb,
            0x66107385520b6116, 0x150637d26cc842d3,
        ]),
        y: FieldElement::from_limbs([
            0x375f8a59dab1634f, 0x6945ed05ddb86d79,
            0xaffbfaefef4bfd35, 0x563a37be1697f59c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x38f1c70daed06339, 0x2a5a1f50ee8dad91,
            0xe3c35804057f3f9c, 0x0cb76925147171b1,
        ]),
        y: FieldElement::from_limbs([
            0x5c03d64c1201aedc, 0x3155e3e151d04bbd,
            0x3f01065274d92758, 0x0391341b6a915bd7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xb92f810acb8c6c39, 0x1b10e64d04cca44d,
            0xcee12e195959a122, 0x446d77c7071b5757,
        ]),
        y: FieldElement::from_limbs([
            0x59e68060e5c9ad5d, 0x60df79f4bd97e636,
            0xed8e7fae1ba2d483, 0x58f07f69cb09dfaf,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x51ef76d2b65620c5, 0x333d47dc30115c12,
            0xc9a7e52ca8b68736, 0x6f3e964fb5382a86,
        ]),
        y: FieldElement::from_limbs([
            0x17603d955b76ddaf, 0x08ec9af5ca65fbf1,
            0xcc6bd8bda9ef5b2e, 0x73ec07167e22db75,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x64ee60e8ff31d64e, 0x3d523998f9e35448,
            0x0f4159c5ca081024, 0x3d8ca2ade06c8632,
        ]),
        y: FieldElement::from_limbs([
            0xb1674189091fb477, 0x6c02323351bad5ad,
            0x6aedab0585985ed9, 0x208b67b4838877e1,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x0ff4f26ee3d1acf4, 0x7259cbff1d56f698,
            0x776c61dda7907f71, 0x2e5cd704ab5104ce,
        ]),
        y: FieldElement::from_limbs([
            0x03eba66a59e909a3, 0x2917e045d580c4c4,
            0x4359ec718d2c41ca, 0x49b39f5384e42e05,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x5437da45efef1b56, 0x25cd152f97ad5385,
            0x1b0abee80bdd6b7c, 0x0e40a22f48fe80c7,
        ]),
        y: FieldElement::from_limbs([
            0x5502d2a3ba27ee37, 0x1963f483693107db,
            0x0d4513dbae62acad, 0x12b2934745acfe8f,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3808bb26d651cc8d, 0x24e4ddff7ff94e24,
            0x395e645a21fc0e5a, 0x2fc00bc270e7abab,
        ]),
        y: FieldElement::from_limbs([
            0x34e7c0e716d46307, 0x14d255b050f0dbf1,
            0x508d2708412b1ba0, 0x6340027b453b04c5,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x8cd0a1ad176e164a, 0x384e7f74942342c1,
            0xf2f5744dccb465d0, 0x25f08533bc61a4d4,
        ]),
        y: FieldElement::from_limbs([
            0xcb2aef0ecb1c819d, 0x579331bfe13f511d,
            0xd6d378bf36815344, 0x38de204f09dd6f31,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x36c8d0741dbe5e7f, 0x3ab41703d14d0776,
            0x20eeeb1582570b35, 0x5fb3944b7acc2873,
        ]),
        y: FieldElement::from_limbs([
            0xbc729ff7efb0c465, 0x570b353862719dbe,
            0xeb7d53ebb21152b4, 0x0eded6ef0cfcf125,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3d47ae679c8b8470, 0x4fd93bbc4bc909a2,
            0x16ef7f5c73583034, 0x1b6923d7e08011dd,
        ]),
        y: FieldElement::from_limbs([
            0x671f03fe9bdc6e72, 0x3202882d4fc1e302,
            0x7c454b4c96c2b651, 0x5d9fe42b63c1325b,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf1fa661dd1b28140, 0x067be619395ffe86,
            0x503553bff5eda7e1, 0x394d337494db1f90,
        ]),
        y: FieldElement::from_limbs([
            0xc276dc5de2bb2eb5, 0x1b4fc3b41fb2701c,
            0x1532632a0fcd3093, 0x5d9183e4cc742f6a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6ee17cc6dffde72a, 0x37c4a82f82399880,
            0x954dbc9233641510, 0x16fb4ce792bca53c,
        ]),
        y: FieldElement::from_limbs([
            0x8941e7088b9d5c6c, 0x5f38a74660967984,
            0xe37f0d2ed0950bce, 0x187a1f2ef9b84a16,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf25873678cfafc06, 0x4c8a1c8fb124cd35,
            0x8432bd7cffc664ea, 0x7bc7aa364883c656,
        ]),
        y: FieldElement::from_limbs([
            0xb6e6788a267cff05, 0x45b4ebc5ac9d2a5f,
            0x5f3ac8e8dac20cc4, 0x3d260229276fefc1,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xcc4ddc09292e54d2, 0x3380665f9033cb72,
            0x18ff9bf72155c8f3, 0x20d3c684bda10482,
        ]),
        y: FieldElement::from_limbs([
            0x190cca4e1cb0ab36, 0x797544c95799271b,
            0xcc8b014d3bd0fc82, 0x5da9f99694a4c177,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xca23efb36ede6fb4, 0x3bb76e1f75b82023,
            0x9c00bf4248a7f3b3, 0x49e737cdac3391c6,
        ]),
        y: FieldElement::from_limbs([
            0xec557930977d32c6, 0x4f2af92eb642e82e,
            0xa5809ac5b9eaa0d1, 0x272981132b34c085,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xcbcd6a6ef32168bd, 0x09f297e94a102f01,
            0xabc7dc50bd56d190, 0x7d5b07de3c69778f,
        ]),
        y: FieldElement::from_limbs([
            0x36ccfd6e6af7fdef, 0x3717cae5050048f4,
            0xc1bae341106e51d1, 0x4362331a5503fb14,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x5848f6eb3ab36398, 0x3bc30829a731c891,
            0x8a9a6ab8fa4ff70b, 0x218ea0cb4363f11a,
        ]),
        y: FieldElement::from_limbs([
            0x101e35996866b947, 0x4ca3a282eadce03e,
            0x80e642de6767c6af, 0x4e8b9913aa02d9c6,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xce4f2d69f03c2d87, 0x20f6b7943432c3bc,
            0x870b62ef703b76a9, 0x576536f1e8bbedeb,
        ]),
        y: FieldElement::from_limbs([
            0x5ee76389c4bb07e9, 0x454138f29164f25b,
            0xa1f7ebc27d752381, 0x1825050c6cf66971,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xd4422d1835b7117d, 0x4cf8463dff47b5e3,
            0xacb5f6b72c6924ea, 0x4af14c63ae9e1ef2,
        ]),
        y: FieldElement::from_limbs([
            0x468fc80881526fa1, 0x34dfe6c12b184f6e,
            0x623b4873865d9d8e, 0x7dea1a7ecce9d1cd,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf0ebb0f1bd2a476f, 0x67ce8c26064d7dba,
            0x862ee104a5220ca3, 0x1e7b8cf219ebab49,
        ]),
        y: FieldElement::from_limbs([
            0x9a377ff1f2998831, 0x78409decef0b6172,
            0x3a5e1286fdc57f4a, 0x0d669171802d22e4,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x61628de00dbfddf1, 0x526408684467a739,
            0x553fc23f0f45fdd5, 0x1ddfc6d4b98ae684,
        ]),
        y: FieldElement::from_limbs([
            0x095aaa873c526c7d, 0x7b6aa08e3a424b30,
            0x921ac50bb992f831, 0x65bd44e73a5b70c1,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xa45e16184cbfe242, 0x0caca6af87825cb3,
            0x73c5207b5a3d69fd, 0x0595b5679badad48,
        ]),
        y: FieldElement::from_limbs([
            0x89266e8aa2ccad07, 0x3df2cea734317612,
            0xed8a7e69099d7942, 0x59e68f62319cf3d6,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x81f5135340b519fc, 0x51f89d8996845116,
            0x0d9fead0e06f9cdb, 0x2c651aa0492fbcc2,
        ]),
        y: FieldElement::from_limbs([
            0x3838823fba33b2ee, 0x3468b6dc3f012122,
            0x5c72ae1fc2b2e3fa, 0x2f619c907db3f238,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xc765ff1bc66ac21f, 0x1cb878648799a201,
            0x498d00f0f9922991, 0x7e8b5b7570627aac,
        ]),
        y: FieldElement::from_limbs([
            0xf84d97ed2f17b9d0, 0x6ac3924a975b8d1d,
            0x0fcaed1800ef35be, 0x653128b241147f9c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3cee7d2b4281cf00, 0x47de2bf37490f127,
            0xed9e2ede42cb5928, 0x5bda7ce1cad9a0b6,
        ]),
        y: FieldElement::from_limbs([
            0x551d2c8b7acfb31b, 0x34ecc65f6587545f,
            0xed9e23f9400c16e1, 0x69edde1de24625ac,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf081929a0c6a9b54, 0x5772e5eef89b15f9,
            0x9c67a478dc02f333, 0x25fe9ec860e4dd9c,
        ]),
        y: FieldElement::from_limbs([
            0xa48659a24288b4a7, 0x21fabe29fa902501,
            0xd25a33c8edb2291d, 0x672c320623be6227,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x74618a9a119c2dde, 0x6778d2ba475f1dfe,
            0xd8b8826d62ce5022, 0x7d67efe5b1f77ec7,
        ]),
        y: FieldElement::from_limbs([
            0x35522284330b4989, 0x7c65f64afa4d71ed,
            0x8214ffce07678411, 0x4db895568cd4ae37,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xd0ce66678a199e50, 0x508640c07445d4eb,
            0x5893454215b7b028, 0x087f1ae04074bb3e,
        ]),
        y: FieldElement::from_limbs([
            0x508c9fecf6fde67d, 0x1b3a4c876cb671cd,
            0xb463efa3f7c86895, 0x3eb568b98111b839,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x2e76f4ed88b2d23c, 0x6afc915f4d57bf14,
            0xb6988bdedd0b38d5, 0x30c9f0fde00143e1,
        ]),
        y: FieldElement::from_limbs([
            0x962ec0ce6ce9a6f8, 0x58a8e1fbb4dd829a,
            0xb26feb656c00e00d, 0x24535cd8083a2bde,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xcd222f350b18ae3d, 0x43194ec2c217c3be,
            0xf2034409cb474564, 0x22c93303ef02d8e4,
        ]),
        y: FieldElement::from_limbs([
            0x6de33f5b20b4fd10, 0x334254b345cba419,
            0xa7a782ba7c34f18f, 0x4fb049fc65cda83b,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x20649a2d1dc0c5d3, 0x3614b2c28f29d338,
            0x6069b5dc9e3012f2, 0x22e1deab31e41833,
        ]),
        y: FieldElement::from_limbs([
            0xc0d901e907cb180d, 0x1495d95c938e47c1,
            0x8f2fe1a6694ef611, 0x326b83b598e5e782,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x00556eba1fa56170, 0x277c739d675d1b84,
            0xe1b6217937aca298, 0x3d89b77e3a2a1eb4,
        ]),
        y: FieldElement::from_limbs([
            0xc1a533a2fec647ba, 0x015604e0ddc0f026,
            0x3e5592ae05b2afab, 0x27ecc4f05622329b,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6696c2fb609731fc, 0x0b99ff654c97b6c8,
            0xa423b37da927116f, 0x07e5d710a298a712,
        ]),
        y: FieldElement::from_limbs([
            0x061b49cd3ba3293f, 0x46759709652aff99,
            0x9d8d9257e7126bd2, 0x381c3998e5b69f93,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x5b02a336eef80438, 0x4f37064455c48655,
            0xa1e194a044a333ba, 0x199b29b879b82f22,
        ]),
        y: FieldElement::from_limbs([
            0xd568673138af7c91, 0x3cdd83c1ff34e662,
            0x3c8f1c897f152594, 0x5776215896d57292,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x5308acdb7d5f685b, 0x36270e6e525f58e5,
            0xbbe1d0fb9892b799, 0x049e2de87c2dc4e7,
        ]),
        y: FieldElement::from_limbs([
            0x497dae2a68302171, 0x77e2199c889b09bf,
            0x6b212763e88c748f, 0x6ac11144a6be4691,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xcdca717f01fea4ee, 0x7586e200343fa1bd,
            0xd64868d39d41fb8d, 0x2ea49e4633ec46ad,
        ]),
        y: FieldElement::from_limbs([
            0x6d42b9659f9eb87e, 0x2c2e3dcb4a04db36,
            0x222c11998d8ee6b4, 0x0f0aec1d78e1f539,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf11ba40934c1aa8e, 0x130c50cc43ca5685,
            0x6eaed92bb974fe77, 0x61fece5ac127b249,
        ]),
        y: FieldElement::from_limbs([
            0x600700d780442e53, 0x67ff03acf5a52b3c,
            0x17861c3eeaac2966, 0x677dc5a84e382a28,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xff5756737023ebd1, 0x067ef4507a8d317c,
            0xedcc4797d0cabf20, 0x376cbe5e493facf9,
        ]),
        y: FieldElement::from_limbs([
            0xaffe84737b31ffff, 0x174bbec480e36788,
            0xd14c942988102e3b, 0x100c7d0500f64c56,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x454a5dc59b499c3a, 0x11c2df78d3a931bd,
            0x9feab3dc5a3a25bd, 0x63e8e870bcb91816,
        ]),
        y: FieldElement::from_limbs([
            0x444d28e0cbf57623, 0x18ec6887cffd950e,
            0xf4ba22ee98078a60, 0x1fb982968965d0fb,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x31d53797f8041f6d, 0x4518d2def1ccb1a5,
            0x510338e692af7266, 0x3387419c14422aee,
        ]),
        y: FieldElement::from_limbs([
            0x91550cb37f0f6872, 0x2173fae73f0b0aaa,
            0xc9d65445eb9c7713, 0x06c96c9fbc3167fd,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xd83ff549333adf0f, 0x46e775c6203a7b48,
            0x608b5bbc62d43070, 0x51ee505d489746fb,
        ]),
        y: FieldElement::from_limbs([
            0x4d6bb340d30209d4, 0x22479fb4f598a90c,
            0x7afbd4885fe52e46, 0x4ff585dcd116041b,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xef48edfc50107acd, 0x310e0c973d804044,
            0x0e2706f3b9d1a3b1, 0x57700c9227ea5380,
        ]),
        y: FieldElement::from_limbs([
            0xc8ef2e1f82754dee, 0x07d0eb83f36d193e,
            0x1399d72f41441001, 0x3fca41bd27d7dab4,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xdef7378a0e4ac775, 0x7c93c36a1cb2bc46,
            0x0fb8176460652929, 0x787da2f83ae2e7f4,
        ]),
        y: FieldElement::from_limbs([
            0x9aeaa419b358604e, 0x2bed86175bee99ea,
            0x7237db803d95095b, 0x5883ce5d43212d66,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1f2e26e74d56ad69, 0x0661034047d5bf4c,
            0x187b323517490284, 0x02903942f338916a,
        ]),
        y: FieldElement::from_limbs([
            0xaf91d5ec2752e8f4, 0x229591c7b3b03eb1,
            0x579d497bfa5ae01d, 0x4a84210ead4bf234,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xc6303c274146f98b, 0x3530728d5cba4e08,
            0xbe944076f6d94bd0, 0x19605b6b092a8135,
        ]),
        y: FieldElement::from_limbs([
            0xa3633dd488ea13ba, 0x58c8ae4966dc8e63,
            0x20218d824066e4ac, 0x575fce28a63b354e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xba8f7571e2520c38, 0x50a85acb476d3123,
            0xdcd3cac0b2a9141d, 0x0ebd69b7f642bbf4,
        ]),
        y: FieldElement::from_limbs([
            0x2c94827c37a9867f, 0x4bd692b25dba05d4,
            0x920ff9fe6696562d, 0x25bff65344c1edd7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1cee95eb08cde0bb, 0x731a5d56a8ed6196,
            0xeaf8ae53361b0232, 0x07b45e2e2250c6ea,
        ]),
        y: FieldElement::from_limbs([
            0x4bfdd3a259320ff5, 0x538d83b007ce401d,
            0x9296ed89207a7b5a, 0x04a0f55a24b95532,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1e620f065f6a44ce, 0x22aec951255050fb,
            0xf3bde595dbc0b177, 0x4f7ed6573d90190c,
        ]),
        y: FieldElement::from_limbs([
            0x086b3e046c85f95c, 0x37b79ae41db9951c,
            0x12e34050c314b0fb, 0x2181cc2c7a6798fc,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xecb8f9a8ec2b4e6f, 0x641f5e021f62e062,
            0x187bdcc5ed8a511e, 0x4a72b988c3b115e9,
        ]),
        y: FieldElement::from_limbs([
            0x7e7d929656b8565d, 0x5d4c584c14482380,
            0xc13beff4bec5fcfd, 0x59403408a00d5dd3,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xc0e49387acb57b76, 0x00342b427eb0794e,
            0x5a910c174fc1d627, 0x7ae8f446eb7c4586,
        ]),
        y: FieldElement::from_limbs([
            0xc9c85b1b23dcb561, 0x12bd7c53ee30fd82,
            0x63e79f0ff7ebbc78, 0x54773d67650bd0a0,
        ]),
    },
]);

/// `2^252 * G`, the carry correction point of the w = 7 comb.
#[cfg(feature = "precomputed-tables")]
pub(crate) const GEN_FIX: EdwardsPoint = EdwardsPoint {
    X: FieldElement::from_limbs([
        0x3dee5bb295508114, 0x12ae82ddc97f6fcf,
        0x60f5c1e2f5beb566, 0x3f99172a63932f0c,
    ]),
    Y: FieldElement::from_limbs([
        0xe33eff8dbdb66890, 0x139291ca41bde4bb,
        0x34c0b221c953415b, 0x5a934ebf6b24fb58,
    ]),
    Z: FieldElement::ONE,
    T: FieldElement::from_limbs([
        0xf197f1de2d1467b1, 0x3aa3c12734d1e9ef,
        0xf08498d52a27ceb5, 0x3b5fe12d9ced696a,
    ]),
};

/// Comb table of the w = 8, v = 1 ladder: entry `u` holds
/// `(1 + sum_j u_j*2^(32*j)) * G` for the 7-bit pattern `u`.
#[cfg(feature = "precomputed-tables")]
pub(crate) const SIMUL_GEN_TABLE: CombLookupTableWide = CombLookupTableWide([
    AffinePoint {
        x: FieldElement::from_limbs([
            0x000000000000000f, 0x0000000000000000,
            0x0000000000000000, 0x0000000000000000,
        ]),
        y: FieldElement::from_limbs([
            0x36d073dade2014ab, 0x7869c919dd649b4c,
            0xdd9869fe923191b0, 0x6e848b46758ba443,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x0e692c2b52108689, 0x29b1db37cf0df068,
            0x81b333cd2ec495df, 0x2f866bf8ceb54fcc,
        ]),
        y: FieldElement::from_limbs([
            0xed33e9d7b8cfb7f4, 0x77be0cb0857980c4,
            0x73621b5857122ccd, 0x704a4bc8a79fd8b2,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x79e4e13c64a01e42, 0x22d804171cf98ef1,
            0x28ae8217fb37d6dd, 0x2aa9137894096ade,
        ]),
        y: FieldElement::from_limbs([
            0xa12a7c195bccc055, 0x60327de2d40e4d4c,
            0x04d463cba7511e06, 0x1af8959535cd0362,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x29e3aa9143bc1149, 0x713965bea15c4f5b,
            0xeb4a60a973865558, 0x7762bd993319d66a,
        ]),
        y: FieldElement::from_limbs([
            0x41cd4eceaa0d0da8, 0x733689b6aee3528b,
            0x8bd8c3141f568387, 0x1516b2ba94ebd332,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x63c514febb2d96df, 0x218972a352400134,
            0x9dda12f63e3038aa, 0x66c63ac9c140acf2,
        ]),
        y: FieldElement::from_limbs([
            0xb810067978c37089, 0x2db36d30438e013d,
            0x4eb3d98b82f4e828, 0x0101267a0e0b4597,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xe73c64dd9dce1560, 0x70140cb6949f6d25,
            0x3d51ec7c1f1a0b77, 0x2e6f36168b557585,
        ]),
        y: FieldElement::from_limbs([
            0xddf30c5bc8767e6d, 0x2e35bc82a1367d92,
            0x2bbbb168f7bee97f, 0x542cb4eeb0bce77f,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xa7cb9837642326d1, 0x16dc1d224e2b84c8,
            0x076f7e18370ad322, 0x1ce58585c5dbad67,
        ]),
        y: FieldElement::from_limbs([
            0xd87a29f07eae34b0, 0x417d7d06daae20af,
            0x7933be8ba4020c46, 0x0511c3a2d5a28e0a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x638170ef259da988, 0x5bbac242c4583b35,
            0xa2abdd183a3c195a, 0x72bc3b185027c130,
        ]),
        y: FieldElement::from_limbs([
            0xf261b4c10931ff95, 0x0b52ae0632cf5a57,
            0xe170c99fe22a4f6b, 0x4aba1faf1c816acd,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x5eaad107f9e358be, 0x77b2d4a60db4260c,
            0xb53790ec441e8edc, 0x2c0bf86097e287d2,
        ]),
        y: FieldElement::from_limbs([
            0x0e881cc00ebcf9c0, 0x4751a9131ff5c6e1,
            0x8485ba0f638daf7b, 0x7e600f67a2566517,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6c3498f39756606a, 0x2b1c7d0fac019c98,
            0x43eebe827bb163a6, 0x57e94fb4f3a3eb5a,
        ]),
        y: FieldElement::from_limbs([
            0x0e58349c9ba104ec, 0x2199b74f4e6f315b,
            0x9e6363e941229c88, 0x2eaef58807c3eb2c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf2934b1549f03c4a, 0x694c49d8062ada4f,
            0xa73a37f92b014459, 0x5dd01b27f8002943,
        ]),
        y: FieldElement::from_limbs([
            0xc65defded541ec91, 0x1c22ff7825a64c97,
            0x52ef08df835147ab, 0x4c6024f28a176b5f,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xb91732c5f37a8b22, 0x5baba2f3ec3f4d7e,
            0xbe23511b5f265fdf, 0x37bbf6921f553b16,
        ]),
        y: FieldElement::from_limbs([
            0x49f5740fac11b32b, 0x61dbddb3fe57f683,
            0xa814e93b287f7cc2, 0x258c063807c85377,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x30f55d8e3d94bd7e, 0x3b87d935125f0fa3,
            0x930aebe79cc81956, 0x621df22a74fac617,
        ]),
        y: FieldElement::from_limbs([
            0x3eccaef5ba7dbab8, 0x494517814b8073b5,
            0xb0447e592b1e5202, 0x6bcb37791046ce10,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x2be8e9fd50a42224, 0x6996f9db6cd065b1,
            0xc386ac61bca15e3f, 0x48b9efce0202e328,
        ]),
        y: FieldElement::from_limbs([
            0x80c10f28e75c2871, 0x76994c74b2639ce3,
            0xde07c0e82f2c17a7, 0x19149653b7311706,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1d30252e26d4134c, 0x1bd243b921953723,
            0xa099ff71e9e34897, 0x70983a37615f90d0,
        ]),
        y: FieldElement::from_limbs([
            0xee87840f22c8b68f, 0x096c7e80297bebf3,
            0x2f6855ed63f557cc, 0x4da4d2f761153048,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x399d816c2e082be5, 0x4ec14f9b72eb3a4e,
            0xeb951c5a672313e7, 0x41bd029fd2b56d6e,
        ]),
        y: FieldElement::from_limbs([
            0x94a44ad8febbfd4c, 0x58437e7dc9ead019,
            0x88e7827a66cd9513, 0x496cbe2c640fe578,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x50aa74cc8ae93118, 0x73d4bf8aeb440efc,
            0x0bea7c962be371d0, 0x2884b2e59dac0899,
        ]),
        y: FieldElement::from_limbs([
            0xe8d5352bf53dedb6, 0x24ae13d6fd2c22d9,
            0xa89aa05c55de69f3, 0x08fe82c072dd4e67,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3191010895c6be96, 0x311a47355bac5c7e,
            0x3472d3bb023b3c2b, 0x2599527b1275748d,
        ]),
        y: FieldElement::from_limbs([
            0x601cf96330cd6a25, 0x70981e92610b61d0,
            0x6a47abcdbfb3b5ca, 0x755b7d5eb445ee1b,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3c8d4e871770d6ee, 0x06d46d0eea417355,
            0x53e823a0f7ff1484, 0x470642ea232463a6,
        ]),
        y: FieldElement::from_limbs([
            0x72a175ab41831a7c, 0x31395f627a8b27c1,
            0x6c7d1a2c09702db1, 0x79fab6f1474aaf47,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3b1a58ff0922aff3, 0x4f0a25074400cef4,
            0x8a8ee482d04055a5, 0x049cda7f84c57166,
        ]),
        y: FieldElement::from_limbs([
            0xfa5a9155dffeb757, 0x363067500a4f84ee,
            0x5447c2a78172c167, 0x7c102c86f29164a6,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x8ceda0c1786a3e15, 0x01891b247d096db4,
            0xcc5ce4be544a1960, 0x7176086423552376,
        ]),
        y: FieldElement::from_limbs([
            0x19f8055f631df57c, 0x20e073de066f9894,
            0x76c71d20632f2562, 0x1aa41f4d0664cab9,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x2be06a00d326bb1f, 0x3e47da7957832c24,
            0x918e3f5a7b36ed79, 0x242106dd9ca01031,
        ]),
        y: FieldElement::from_limbs([
            0x18a0697d42afd536, 0x11f33fdd622714c2,
            0xb1d7be810c06bed7, 0x7b9cc40626457058,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3da028baeb632bae, 0x3de075d3105d8285,
            0x9aecb8d882b40092, 0x73175b6a8357ad0e,
        ]),
        y: FieldElement::from_limbs([
            0xcedb306d65f0be19, 0x128efb20b310967a,
            0x3d629fd265c50970, 0x78e82c99bcc37ebc,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x5bd73bb3f57cf051, 0x32cba8a9eb098243,
            0x7bb072abb066a2d5, 0x0f221220013e8e14,
        ]),
        y: FieldElement::from_limbs([
            0x2fcdce462f930795, 0x402c9d364043be20,
            0x45ecf791782d2aca, 0x202904d26441eb30,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x32e3f7a1be59b95d, 0x4de0cd47b63960b2,
            0x1324d540401ee759, 0x0195f5e3e2ff65a8,
        ]),
        y: FieldElement::from_limbs([
            0xa9533dde52f503d2, 0x6c0fd23d14ce520c,
            0xdaecab86a0a008ad, 0x1b0a22e40819cfeb,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6ee5e9988fbb95b5, 0x6ef95f18b20f19d7,
            0x1f2c22e8a3f08953, 0x6c90ca047d1811c5,
        ]),
        y: FieldElement::from_limbs([
            0x8537610fc2fcb9a0, 0x6c1fdd548c4c93d1,
            0xda06b44b53bdc79a, 0x645929f91d3cc07e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x082c99f77a1381b4, 0x6405c786adf01d82,
            0xcb5969eacd3558c3, 0x2132f36ecf5d64ef,
        ]),
        y: FieldElement::from_limbs([
            0x46cc872e464fda06, 0x236a92bba26eff9a,
            0x3c293cb0606dc04e, 0x41716fec61af1c29,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x2dc4670ba4e564e4, 0x02153ab5c05bf5cb,
            0x4eb260a192a68ad6, 0x4549608d42f230df,
        ]),
        y: FieldElement::from_limbs([
            0x8e61a754985402d0, 0x69cf45006e98860a,
            0x601f108e9632a4bc, 0x0aa73604993a0731,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x7ef954d84705d87c, 0x6fd19ddaa16f1375,
            0xa398968b090f7fb6, 0x4a3e1908269f4735,
        ]),
        y: FieldElement::from_limbs([
            0xe916703f6fdd6cca, 0x60bac745a363f431,
            0x09c5a003699a1153, 0x7c64904469d3ee4c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x96c9f2f6bd228058, 0x0d8dc5deb258664d,
            0x362fa8a4fda8091b, 0x6022b605e799330d,
        ]),
        y: FieldElement::from_limbs([
            0x1558ea9c651231d0, 0x2adc35c359863ae7,
            0xd7784bf9de06d2c9, 0x2c45edc058c6c07c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x2a272f140cf6a039, 0x6cf5567783b932bd,
            0xb366286876763a09, 0x1ed3fb5745b102a7,
        ]),
        y: FieldElement::from_limbs([
            0x39bfa0406ec1d258, 0x5340f69d79366580,
            0xb16e1482f5239340, 0x6f7a614a5861efb1,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x8a873fdb7081d704, 0x25011a5393ef5052,
            0x2b8ed62a09412261, 0x0a511bd753027e4d,
        ]),
        y: FieldElement::from_limbs([
            0x6ffb58e77b1a075b, 0x1a0997c83a30f3e2,
            0xfac380fbdf73ec1b, 0x5347439c7e936e10,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x69c17ab675db020d, 0x5af4805f99a172da,
            0x6e6ea3b002befd41, 0x2122d08c68606296,
        ]),
        y: FieldElement::from_limbs([
            0x934501006dd12750, 0x1998299f076df9a1,
            0x92a3c5b9b07319bd, 0x6e1da08c14284de4,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x46896b4b00abb531, 0x350d6776c51932a9,
            0xabb0e649510ec69c, 0x27d59f94a1013afc,
        ]),
        y: FieldElement::from_limbs([
            0x9d9efedec634ba37, 0x78c2d703a4b55c48,
            0x54f79179cccfb0b5, 0x1f49f591c2c63785,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xc83f76814420a8a9, 0x34613ff8436bffe5,
            0x3ee8f858a065ac74, 0x3474de16e38f3ac3,
        ]),
        y: FieldElement::from_limbs([
            0x0ad640e4bc9ade2a, 0x443a14c5568b66e5,
            0xe016f7c12189001a, 0x4d71fa65db967e48,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x2840420705bfa45e, 0x0a0cc8cf1645138f,
            0x51f631c9928753e4, 0x5dad8874f340c7ac,
        ]),
        y: FieldElement::from_limbs([
            0x7115aee0861b37dc, 0x65783a8443495b0c,
            0x3e03cd00994c9129, 0x202b0bacba8ac5ac,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x40dce2cfa0d1ca2c, 0x1bd9b233ae2fb858,
            0x309156b972266e96, 0x66a0e17e938789d5,
        ]),
        y: FieldElement::from_limbs([
            0x87cf9baf62880e94, 0x114e5f0f1fe1b829,
            0x609c915831c3c07a, 0x1b21919950fd249a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xda758fbf680f83e3, 0x0b3a08e40a24b8c2,
            0xdd777684f4383b02, 0x47bac7465e9ceaf7,
        ]),
        y: FieldElement::from_limbs([
            0xd0db3ac726a1fc64, 0x2b9aeed793a7c10e,
            0xb22613cb6d9df6c9, 0x001886dc74df384d,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3e91c34d7aa57aea, 0x69d9bdaaf993aedb,
            0x8422a4f24d9bb9da, 0x02410c1750863bed,
        ]),
        y: FieldElement::from_limbs([
            0xe30c350602f96d88, 0x74ae58c3c571d036,
            0x197b09b142846429, 0x463dd9816c666996,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xd3d4ce26fe9337c9, 0x78748a39dbdd968c,
            0x68f8765c9312987d, 0x170635739f8e35f7,
        ]),
        y: FieldElement::from_limbs([
            0x69202261cff9aff4, 0x189d2b7acb168047,
            0xa484de22faba45db, 0x0d75bf94230b2b2f,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x112af14864ea5a27, 0x779d50a67c9c72ff,
            0x26313c47d178df80, 0x4d659bb726593146,
        ]),
        y: FieldElement::from_limbs([
            0xbf1c32db7cfa7a2c, 0x79397fe8ccdd49fd,
            0xc4ba634f14ee2c1c, 0x4db880a7c6752efb,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xc2a7df12c7b9f8f9, 0x5278bccf4dbfaa52,
            0x4062efe069b7efe8, 0x3f4387f9e049b11b,
        ]),
        y: FieldElement::from_limbs([
            0xb1e2392f05b688b1, 0x1cd8b2428921af0f,
            0xf8b51ef15c8cd5e6, 0x143a4275e683d1ba,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xe98ea99ee13fcf6d, 0x6d567f2a1887e8ba,
            0x4143e2e109d13320, 0x626c20c162702c91,
        ]),
        y: FieldElement::from_limbs([
            0x68967c0cdae4aca1, 0x5bd98faed4ecc0bd,
            0x97d47540514d24e6, 0x7e6b9d24fafe80f8,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xf5bff5a891ede735, 0x600dbbf318966aa8,
            0x62a13cb7c782c7ee, 0x396c66e698820d80,
        ]),
        y: FieldElement::from_limbs([
            0x9d897d208ab10349, 0x5989e13a92dd696b,
            0xf1ce1c7713bee7f9, 0x509b0ad491c31784,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xfa2d57c00f140aef, 0x6c71549ad4f91cf9,
            0xff9cd3b801351c82, 0x02a46f6a7e42b835,
        ]),
        y: FieldElement::from_limbs([
            0x4047df78b8b7dc5e, 0x6d163e3ae85a22a1,
            0x90fd2f56f0330665, 0x1ac33a648bffd5e8,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xa572edcc658e01e0, 0x60c3ef82559cc2d6,
            0x4d07761af11c66b0, 0x70113bfb53d7e291,
        ]),
        y: FieldElement::from_limbs([
            0xe4a79aee160f24df, 0x01de9a052171c5fd,
            0x49ad4d9775bba82f, 0x5fa25a756df35a26,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x7aaf1d4392b93f28, 0x766f697bd1e055d1,
            0x66279bd01ef815ec, 0x72213eb562d07af3,
        ]),
        y: FieldElement::from_limbs([
            0xda01c15067aa3166, 0x7753ad7c1b5254d3,
            0x4632802573117cea, 0x6c32c3d056988ff7,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6c0b502a27f9317a, 0x26a5d817f2ac2859,
            0x88db19c4c2575c17, 0x6160ad345ce1911d,
        ]),
        y: FieldElement::from_limbs([
            0x4b616f28ef1acdeb, 0x346566f4b1f23520,
            0xd6c12b5bd9f0d5a5, 0x285236c467e1b69e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xee5022f45d8884c2, 0x648187a66cee4120,
            0xd21b231d8f11cfe9, 0x60d80627a007e5df,
        ]),
        y: FieldElement::from_limbs([
            0xa5fed209cf08a3ff, 0x734afb90aecebd0f,
            0x72d10ba167f13809, 0x323904255b4ecbda,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1b1ab20ba2aa5309, 0x16e5cb7b70bd6b15,
            0x9d49dbbf898068da, 0x610e7f28d5c8773d,
        ]),
        y: FieldElement::from_limbs([
            0xbd2ac30cb0e05179, 0x4903b9dbbe2f7bdd,
            0xb82d06dc7d78430a, 0x531d540c811dcde5,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x009b63650c014103, 0x2825fdb792f4b3c3,
            0xb9111d805ffd66f7, 0x180f5016eff97ab6,
        ]),
        y: FieldElement::from_limbs([
            0xf597e6e466abc784, 0x2e5e8507e1bd4fa7,
            0x19a5c489e0182e26, 0x63f2c26ce5a72e40,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xa5dc9673ff9a79c0, 0x7f8255bf092ef306,
            0x7e155d2866cd6a89, 0x32f4488cee7cc92b,
        ]),
        y: FieldElement::from_limbs([
            0x45abdc745e099457, 0x48330ed29d5fb570,
            0x2127414334b981d3, 0x73520059f7930049,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x19772b40e5d25214, 0x6df2fc1900010d6e,
            0xd3175b2943ea940f, 0x05159c01c16002f1,
        ]),
        y: FieldElement::from_limbs([
            0xb153e0fde9c68466, 0x37316c19540738b4,
            0x17c7a66da0e63fa9, 0x4454853e29968806,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x23ca0c21fcf80990, 0x5a2fefc1b1a6e898,
            0xd8a24d5cdc997be6, 0x46f64a09ee78ecb1,
        ]),
        y: FieldElement::from_limbs([
            0x36fe3f977d44f733, 0x124a9da2ee5690e8,
            0x65328938364d2f6b, 0x160fbe5355822e7a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xb6f5a869b1c17b44, 0x67e4de26dfe4f4e3,
            0xed31b78913183956, 0x2c62ccbea4c7da32,
        ]),
        y: FieldElement::from_limbs([
            0x1fd1cdeecd101730, 0x2150a71f8e3a7501,
            0x293650ff21de4af8, 0x6cc03c682d16ce87,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x81459452abcc3bf1, 0x587b97f214fb22d1,
            0x260d195ede9a0a54, 0x3364f6b106b7dd6b,
        ]),
        y: FieldElement::from_limbs([
            0xa88ad6435d617f44, 0x2355f9fb9632479a,
            0x1845dc57f85de50d, 0x50fbfd2d219a27ff,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x52096036ab699940, 0x65c9c827c29b4287,
            0x190953f69b9f5eae, 0x12e656eb41a2955f,
        ]),
        y: FieldElement::from_limbs([
            0x58f92f8a657e2856, 0x16bd0d4f1e541580,
            0x735123c880e2c380, 0x219d0128109313db,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xfb4cf233b3e5666c, 0x0a2f8e51fe33ed44,
            0xbd24dd02788e30aa, 0x5eda3d73d67edcfe,
        ]),
        y: FieldElement::from_limbs([
            0x9a6b72bbd5306c25, 0x168be5ec834be619,
            0x522dd529d605c494, 0x0025500f1b353fc0,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x24adfba3cb9f1b3c, 0x2be2ba5b13e9888d,
            0xefc0e10e4824adc5, 0x70878fa33bcb59cd,
        ]),
        y: FieldElement::from_limbs([
            0xbcba9087016c1bc3, 0x5b41c03d1e31f40f,
            0xecf78c5c7639ef25, 0x7c3c2dd2d495fc92,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xa651602fdb2903a1, 0x61522d4b51ea963b,
            0x2475a95eaf7f2847, 0x06e0e858004c8a02,
        ]),
        y: FieldElement::from_limbs([
            0xb2f475ff25e03693, 0x7bb563e250534b27,
            0x26c7385856bf5ecc, 0x134fd9925eca85b8,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xbf3692ff808759c1, 0x1c155eec26e55d58,
            0x55cf25b67d184e6a, 0x3abd66502df1c2f2,
        ]),
        y: FieldElement::from_limbs([
            0xcb7a4385c079c347, 0x638ab02664b9ab95,
            0x85c5710c4228b303, 0x290c4ff9d4bd3322,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x18b6d4b54ae09599, 0x2c6b7df3c468c854,
            0xc259b6294eef466c, 0x612595765012eac7,
        ]),
        y: FieldElement::from_limbs([
            0x2c9e88fd66e705ea, 0x59a8c6785421a523,
            0x33a3cf8452667f6d, 0x62bbc43954533cd5,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x97b5a6fc2a121de9, 0x3536ce27d7b4db1e,
            0x03508112afe64137, 0x20df22ff1b4ffc79,
        ]),
        y: FieldElement::from_limbs([
            0x7fe66d225f42baa1, 0x448de6617aa69d87,
            0x4522e8a2edeb7848, 0x0ef365c3437a8f9d,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x07c1d9d5989844c0, 0x13aec7211f384708,
            0x9bbc1f63aa0090c7, 0x393223699758ccc2,
        ]),
        y: FieldElement::from_limbs([
            0x81e4b763692f49b9, 0x0242897e57317126,
            0xa134b85714e43daf, 0x48b027b70199c4ee,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xd0c546f80f494033, 0x3c6bbf1949bdf71d,
            0x99d331ac48ea6906, 0x622c2b27914b8119,
        ]),
        y: FieldElement::from_limbs([
            0xbb81a8a691120bf8, 0x2c5c4163a7789161,
            0x089205cd4bbc6295, 0x6126bfc0e8de65d8,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x5dacfb777572136f, 0x590f6251272b94dd,
            0x73c8b73fb9ba96d0, 0x66e952c0b81d25d7,
        ]),
        y: FieldElement::from_limbs([
            0x551ad368e6d4f8eb, 0x41e20a74db18b275,
            0xf9f835169c12c678, 0x4d02a8a7191f8a4e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xdd955e19782c7df7, 0x63789edf7e8bc884,
            0xa0693736e09a368b, 0x2ca2c60d6ca962ba,
        ]),
        y: FieldElement::from_limbs([
            0x1e6a8a9a4566c6e0, 0x3c2695ea2b806e85,
            0x908b0371f92a31c7, 0x33b25ff50d4c2051,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xb3ca398bffbe16af, 0x53c594da786302fb,
            0x9715569a4d5763dc, 0x67673912ad9302fc,
        ]),
        y: FieldElement::from_limbs([
            0xcde3c285de6b305a, 0x4e823af06fc13538,
            0x728764f31665e9ea, 0x1adc884a00a68140,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x609b1028e2d255e7, 0x78a570b42cdb656e,
            0xb7c3e93e44d84b2b, 0x4b2b08e5ca5dd3cd,
        ]),
        y: FieldElement::from_limbs([
            0x4e229a522da57343, 0x753de3c3b5e7d47a,
            0xe45151ce80a64704, 0x5cf92edd8d9f9b4a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x32e50326e3ecfc5a, 0x7606968908a00a7d,
            0x4c8f067e97bed258, 0x1a15b9f88545b8c4,
        ]),
        y: FieldElement::from_limbs([
            0x3ea55674c3d69795, 0x44993dfe83fca6e9,
            0x7d83ca39ada462d4, 0x592dfb4a5e031de9,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xc86052c36bce3be2, 0x76041c90ee2e0fca,
            0x7961d3cc1b77c5a8, 0x15061c7febe100bc,
        ]),
        y: FieldElement::from_limbs([
            0xba6fe327f8e86d7c, 0x33850d3b47bd51a9,
            0xc00edabd4f822a3e, 0x456386ebfc0de0f6,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x8d9d2d0bc1daa720, 0x59c73b7b0ca7afb9,
            0x7c730af762f03bfc, 0x46b6db79b8d82162,
        ]),
        y: FieldElement::from_limbs([
            0x8b4b99091659762a, 0x144edc732fdcacc4,
            0x105cd77032658432, 0x1026448d611f3d75,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x71258a4cc2331c2c, 0x4ef12183fb2c3cf3,
            0x273502ac8229624e, 0x2244ad3f7401cde8,
        ]),
        y: FieldElement::from_limbs([
            0xb3edd5d9ecc83cd3, 0x65d27166602f4430,
            0x32def6f96bfc94e7, 0x481853e5447d6ed2,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6c6b2a4d182befe1, 0x0ae090e3a78cc6ba,
            0x7ab89549798c3055, 0x4424e7fee68df44a,
        ]),
        y: FieldElement::from_limbs([
            0xa22a1dde61c4bcda, 0x7f61e981dfb1e6fd,
            0xea65364b1e26cebb, 0x14400f0827e32d8c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xadea183f733cca66, 0x43ffacfeb7308026,
            0x556063a0ff9b6715, 0x46360b2ccfbcbc16,
        ]),
        y: FieldElement::from_limbs([
            0xab0c96189fe2622b, 0x09e539f6f0c3be24,
            0x71d64227529a6182, 0x3f04d3a0be2c0011,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x474f64d5bc44cc1e, 0x48fc31c4e5c42917,
            0xcab4b6c5ada07f5a, 0x6765f3c38531329a,
        ]),
        y: FieldElement::from_limbs([
            0x1c44ce2fd9a508fc, 0x6a95c0fa18499970,
            0xc124f00a71811a70, 0x37699f892e059956,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x11cf868f6b7f8342, 0x558603795e3e8df2,
            0x6ed434ad61bf00d3, 0x0843221ba0ff3bb1,
        ]),
        y: FieldElement::from_limbs([
            0x1fe49eb46a9e2418, 0x11800f94ec4edd80,
            0x5b9bc04b00e5540d, 0x062456c4f033eea9,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x849652cf634c0c6a, 0x4af94ea80b16aeea,
            0x6cb82878e6facea2, 0x77762f31499fdffb,
        ]),
        y: FieldElement::from_limbs([
            0x9151500eb0492b41, 0x276a8d98a360fa8c,
            0x3812384550fc1776, 0x5d1f0b100e025e1e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x7fd455fe5e53427d, 0x6089f56c2a7de8be,
            0x423e5d80dd74ce14, 0x2797b91f1eae8633,
        ]),
        y: FieldElement::from_limbs([
            0x6047e19df907e159, 0x6854b34877c7cf3d,
            0xa0f9ab9797525f6c, 0x1afaa0e17988cc8a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3b0f698cec073832, 0x63503857639b62f5,
            0x49c526f1872c7a58, 0x132061288bedb713,
        ]),
        y: FieldElement::from_limbs([
            0xe62725136479b2c1, 0x1da6d569da9e70f4,
            0xb937116a7e460218, 0x27712fb79f5182a1,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1667a5d62e3b35f2, 0x6944398b36d0e12f,
            0xb00154c5de63205f, 0x2a2f74343febe92d,
        ]),
        y: FieldElement::from_limbs([
            0x973304ad6c01f423, 0x5f5b8a1dc473b605,
            0xa356f5e8e64e7b0d, 0x00be8e6c0bdb2ce4,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x50f604d8d7c6e4d1, 0x4cdcfc1f286ad550,
            0xda71782f6a178817, 0x5e7bececb620cd3f,
        ]),
        y: FieldElement::from_limbs([
            0x23d46bd892ddaa95, 0x03e18c33b88e3a5b,
            0xd261e6ad57b5601c, 0x26674e7ba7b351a1,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x4ab0274412d283a0, 0x71793f18b0407c96,
            0x36640a4cf9cc2020, 0x033b032797bf64ac,
        ]),
        y: FieldElement::from_limbs([
            0xddb390e1c70add33, 0x4ea540a2e98bbfd0,
            0x8084ec31666ffe74, 0x6c0b56e4767a2f4a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xebaf9d8854db2992, 0x656dd17ad53830b5,
            0xb47d6faecf4de613, 0x52067591ce164ea1,
        ]),
        y: FieldElement::from_limbs([
            0xe9aa92b9daa7ce41, 0x6913d4a8f78129e7,
            0x0a8156d704a9a7aa, 0x345b7a148952142e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x51ff94e0ad4a4529, 0x5cc29992004f3dd6,
            0xa37a2748454bae83, 0x76dc68973b70a735,
        ]),
        y: FieldElement::from_limbs([
            0x01732e867c05f4c3, 0x10b02134132a54c7,
            0x58c998cc52df5803, 0x19f2ad5efd2651ad,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xeac96c6272e08de5, 0x78e199a16dae5264,
            0x6629b6f83bcc2bde, 0x40b8e8785ea0b265,
        ]),
        y: FieldElement::from_limbs([
            0xc637bdd0a19491b6, 0x358130ec5a75beb6,
            0x285cf8d460b35f7f, 0x54c6d42d31d0e58c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1f0dbcc9fa802ec7, 0x39b32da4c36db104,
            0x91d40b161039a071, 0x21da2e5011795f12,
        ]),
        y: FieldElement::from_limbs([
            0xb6ed28be9c23f454, 0x6c4bf1d81ece1de6,
            0xa1226e2387524be4, 0x72b384a1b53413f9,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x892bde386b219d1b, 0x366ec0418b0a8c8b,
            0xf3ecd71ef7c5b14d, 0x1881d4434fa8d568,
        ]),
        y: FieldElement::from_limbs([
            0x13bbe301bf631c86, 0x6f39fd8d0006c9f9,
            0xcd1d85102c69d7df, 0x402b03a64c5c921e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x02ff37c5bf81676c, 0x04ac2ef8d1efba68,
            0xa8f5fc015227b1eb, 0x7a748c013c9d522d,
        ]),
        y: FieldElement::from_limbs([
            0x00a8ed2a74b4f6e1, 0x52c3eb3694981da5,
            0x263ca40cc6150d41, 0x69d3deec48021ce9,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x8a923839122109fd, 0x278bcab3ddb7e2fb,
            0xe686212f5306f798, 0x6dda731055efa3c9,
        ]),
        y: FieldElement::from_limbs([
            0x5285bbde66d3b37f, 0x65db550a960a3099,
            0x401d7ab5b96c639b, 0x7f72f954d21f3ea5,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6183565ec48cf3f3, 0x77628c047979444d,
            0x615989afe0031dc9, 0x6424ae2688d82aa0,
        ]),
        y: FieldElement::from_limbs([
            0x3660641944ad8ed9, 0x16dcb994e8c7cae5,
            0x38f10f9dbd924a6c, 0x7116064182a230e1,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1b57bd3af144dbba, 0x6ffe779348b58a8d,
            0xc0bb30891bcace13, 0x22b9c2f948feab67,
        ]),
        y: FieldElement::from_limbs([
            0x08dd0b11b3a78179, 0x44f5863174bd6543,
            0xcd36139618a7f8c2, 0x48de27484afd3026,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x0672f7964406a52d, 0x7d74ec938450a17c,
            0x79be5066ae021a45, 0x1b8335514f106762,
        ]),
        y: FieldElement::from_limbs([
            0x36347273d066a6c4, 0x729a07aa666b9beb,
            0xcd5c9679b04a78c0, 0x1871e463922f7acf,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x84aae36bbdbe5382, 0x02492c3380302086,
            0x7a2f7807924ea10c, 0x5f5ed39eb6684087,
        ]),
        y: FieldElement::from_limbs([
            0xe4d6b596114994ea, 0x7b5d7b880cd514c1,
            0x759c7c738fc06e43, 0x65c0cc5ba1eccc2b,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xb3595896d47494be, 0x635d7dc1664e624f,
            0xa307af0a338193b3, 0x75f2a87e5f945e7a,
        ]),
        y: FieldElement::from_limbs([
            0x0699e2ed19546484, 0x3ddd5502c523b38e,
            0x09c238a3d4699213, 0x15c2d4f3288f1ac2,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x794b9fde5539fdbd, 0x00a4c8edc5122fd8,
            0x584337f0f710607e, 0x4fbdf8fe52bbf0c6,
        ]),
        y: FieldElement::from_limbs([
            0xbeed9782dc8484ce, 0x3c472eec38398e88,
            0xfe143f8c6216583c, 0x0f457a23a19e8513,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x41ab2c4dc2f58383, 0x04e30b2af359c2c7,
            0x701e766dcafd105a, 0x3b0801a0c3bde485,
        ]),
        y: FieldElement::from_limbs([
            0x85c8da6e017b931f, 0x5232f2ae37f5de0c,
            0x67d90613db73a5bf, 0x6b847a4b2317c98c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x82feac69a7cd7015, 0x424b79c5585cfe26,
            0x7c1693460b2d0634, 0x70121a6c9a7816f8,
        ]),
        y: FieldElement::from_limbs([
            0x4b1a9e9394677651, 0x5bbc81731836bce1,
            0xbfd55a98f807269a, 0x05b0dcf6c50e5616,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3689355edaa6eefc, 0x433575dc39d6f3ee,
            0x53c376fb71e6d0fa, 0x7b75ab4dd7460312,
        ]),
        y: FieldElement::from_limbs([
            0x5b4ae4b231bf04b8, 0x5a9677f87b599ba8,
            0xe0326bc4fa2ca744, 0x11ad8c06d5340001,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x57ce96720ace4297, 0x4c1c7bad23245ce3,
            0x50d85ed4f867cf41, 0x57d3671eab5ad319,
        ]),
        y: FieldElement::from_limbs([
            0x7223dc981dd6b0b2, 0x5d5892bdd9550776,
            0x74ac25392e70a059, 0x2358c235433a1997,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x977add80da922cc8, 0x613cedca577712a4,
            0x9dc42052d7a63aeb, 0x46e7022975158bb9,
        ]),
        y: FieldElement::from_limbs([
            0x51fd01eb7fc05d32, 0x319921802c6ce600,
            0x8578eb315d1fecd3, 0x4c0611a9e939520c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x3c19db5d8fea9e50, 0x26a00f12f03a8070,
            0x4a0fa0f0d75dbb23, 0x236528ed6438dcb8,
        ]),
        y: FieldElement::from_limbs([
            0xf64c4a1fa82ae5fe, 0x24bf9649017e3859,
            0xd2efefb6e3885fe0, 0x430aaf1a36537cf9,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xefd92a7772283727, 0x012f495f5c9c691d,
            0x5b772f67c7ff429f, 0x33d5c5e60a3f64ee,
        ]),
        y: FieldElement::from_limbs([
            0x284d22038b8acb6f, 0x4f69f38145ba86de,
            0x306eb189c67d6d75, 0x4f0f79eb2d924523,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x98505c85c16c4018, 0x684bc14ae520d034,
            0xd9bc8dbc651e3e48, 0x62bbd623a2532c35,
        ]),
        y: FieldElement::from_limbs([
            0x9e5d7a332ac5a2e7, 0x134ac10a66909f2b,
            0x294ded79913c9c5c, 0x5a4bfcf34aae4228,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x652d44970cf7dc69, 0x35f08a571316b46e,
            0x3679c35cb7fd0d19, 0x001c1a844974083c,
        ]),
        y: FieldElement::from_limbs([
            0xd3636c17b3670754, 0x2365a8e51418582e,
            0xa49012aa91ef513c, 0x699a784c2104cb09,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x4f3fb4ddc036cb3e, 0x23d67a308148fa0d,
            0xd9aa34fc6325ed26, 0x3da149343f59bacd,
        ]),
        y: FieldElement::from_limbs([
            0x4dc557d1ceade366, 0x6c9bb47f8dc8c6e2,
            0x2966e21030419d59, 0x25ad1874cf53330c,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x0f8193baab903d60, 0x0401239915da48fb,
            0x27584c2ee8059851, 0x6acdc10404b6cdb0,
        ]),
        y: FieldElement::from_limbs([
            0x9144fb3d23df8e3b, 0x4964a5a54b5cbf87,
            0xe8b7ae5657c57309, 0x0798dfb0a66eed55,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x21e36fef9aa453ee, 0x1d9e4ffcc4818d89,
            0x502b1d5a349f40db, 0x0daecb8641228475,
        ]),
        y: FieldElement::from_limbs([
            0xafad7aae90b62197, 0x1ed18919e6d99efd,
            0x1796a98ff289a29d, 0x28fa365c0654734d,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x768f1d887cc53bbc, 0x6039a4e94561d1a9,
            0xc33b84f782ff1eb0, 0x00dbbaad1a410de8,
        ]),
        y: FieldElement::from_limbs([
            0x26d098dd9a82e9e2, 0x65ad0678ec7b3f4a,
            0xfc1f64cb51483f1d, 0x5f2583bdec75110a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xbe71cd89f6f08295, 0x01c1920166cb08e9,
            0xeb47a27907ee65d5, 0x2f897a5c90e5b195,
        ]),
        y: FieldElement::from_limbs([
            0x139a89fc039e042b, 0x22ab1e0ad85f2880,
            0x148f5c77b2867979, 0x5876f0dd99a78b21,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xc1c67a449ef66098, 0x5745671ca2f8ad5c,
            0x10aee4c9a164bfbc, 0x4ed05a9445307402,
        ]),
        y: FieldElement::from_limbs([
            0x4ddc882a167dfd2a, 0x55462eec69343ebb,
            0x67f019200d101b1a, 0x38ab946a070d294f,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xd6b80326b09e9d68, 0x0d30138eb1371936,
            0xa2d69161c3f5404c, 0x17e3a61335c82996,
        ]),
        y: FieldElement::from_limbs([
            0x5ec96947147c5b40, 0x6f7596f84153bf3b,
            0xd106f0a4d8513d9e, 0x7062da7f4d727f6a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x16940356986e5c24, 0x2a1b40cec77569bd,
            0xffb69837b5452fb2, 0x369e611333110a91,
        ]),
        y: FieldElement::from_limbs([
            0xa2909146ce928867, 0x6c16ee795a75f70d,
            0xf821924710665bac, 0x2103ecb59c2e3230,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x46422886893d69b8, 0x30d0a84850472264,
            0xd54601c8a2249625, 0x35a80aa88f045fb9,
        ]),
        y: FieldElement::from_limbs([
            0x54146941bb47d51a, 0x1743514dd74a38ae,
            0x7fe16754f27d2b65, 0x05da646f96dd67ed,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x76cbd638a948ddce, 0x6d90356cefd71933,
            0xb90f9d9d4bbd6c1a, 0x32a0d63fa9b9d1d9,
        ]),
        y: FieldElement::from_limbs([
            0x45cc2bc2a672987a, 0x2b6ce4a8ea94fe8b,
            0x6c040a5623a45536, 0x4daeedfba3935f53,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x0c011a713124d456, 0x6dcdfa3248fff9bd,
            0x27724eedf4498ad0, 0x186204c65e6fb75e,
        ]),
        y: FieldElement::from_limbs([
            0xfc3cbcd671904180, 0x4a0b9e4a30d4a61f,
            0x78b18826171fa37d, 0x4526c2a804f96d1f,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xca318c731a9120ad, 0x60c00a0d6924cd58,
            0xd1ccf5a0715a6e78, 0x2c2933debb738ceb,
        ]),
        y: FieldElement::from_limbs([
            0x48c3d9a1a1c75481, 0x655e13993d052aaa,
            0xb1cd31cdf0d8637a, 0x086930936d8a3528,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x1da4274ed80ffb84, 0x507c19ef54a22771,
            0xec4785805dd70009, 0x08c54674896801c6,
        ]),
        y: FieldElement::from_limbs([
            0x7976d5fb96bba9ab, 0x6fc6b18cb344b902,
            0x1f061e28740d854b, 0x4ff326bf97e2179e,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x05e948d170a67da6, 0x2fd78e41cc1700ab,
            0x02103d23e7631f84, 0x63ad8c716289e1a2,
        ]),
        y: FieldElement::from_limbs([
            0x204e67963fa7c353, 0x379cdd8bc74c0ed8,
            0xb10b05c4f273f986, 0x328a498c5a445a4a,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xcf6c0773cacea123, 0x051f5b579e609968,
            0x618a0564c515421d, 0x66c0a1186378cc88,
        ]),
        y: FieldElement::from_limbs([
            0xc9ea5316922d7a3a, 0x138c210fbf19494b,
            0xf534c206a03b002b, 0x36c1173d05b1b257,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6dc760e563b366cf, 0x7dcd442d281452e2,
            0x4d36631606e0264c, 0x476dc66db8c8f2d1,
        ]),
        y: FieldElement::from_limbs([
            0x89eaf4801ff7dd54, 0x1e9fdeca6657c319,
            0xa1a466ecb2c3a8f4, 0x4d94d7e7fd22bbc6,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x6bf5b58257ed387b, 0x4c836f8e006da76c,
            0x228098496beca652, 0x1f6f3d91d7e33eb3,
        ]),
        y: FieldElement::from_limbs([
            0x828edc57329a0b1f, 0x78332cb8e4cc90a1,
            0xe471963f58a8482e, 0x26109ff020788830,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xcc47e645d3e6dd60, 0x4328bac901799627,
            0xbd4de219e202b90f, 0x2842ef57ff1e7b3f,
        ]),
        y: FieldElement::from_limbs([
            0x4367d81c26e753f0, 0x42a23a2f38af711c,
            0x2ef5ec8d2b20c2a1, 0x46dad53966b3027f,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x67742f32ef02195e, 0x2ad4a601e1cad8dd,
            0xf4e138571d573e33, 0x34dded3f3e112262,
        ]),
        y: FieldElement::from_limbs([
            0x29dc4ae6adbb6b5a, 0x4dffdcd5c5d3d7d3,
            0xd606653fbb258010, 0x565921e9d6dd8b46,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x8abde2d1c877aae7, 0x731fd6ee427f3440,
            0x403a81fb168b1a38, 0x05ac4a26c7d9a840,
        ]),
        y: FieldElement::from_limbs([
            0x94be06c4746f4d26, 0x7e557cb4b4be9065,
            0xe1e5fe953f658cad, 0x6b03a9a02bc91ccd,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x0d80e81d6354d26c, 0x77a9364f604a3855,
            0xa2d15ba6481b65e2, 0x6b48ca5461de5450,
        ]),
        y: FieldElement::from_limbs([
            0x0df32838fba98620, 0x12dbbcc92d04bbd5,
            0x462ec81a8bdc56b4, 0x7fb9b2d0aec54030,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0xdb99db0336ce3656, 0x4dbf964df23aedcb,
            0xf182e5fabd433280, 0x2b22fd68d32c726b,
        ]),
        y: FieldElement::from_limbs([
            0x974141cced5f91df, 0x15104380fe0103ba,
            0xace0a79c61c8b0bf, 0x38e42addd79f7573,
        ]),
    },
    AffinePoint {
        x: FieldElement::from_limbs([
            0x4a927d03f7eeda77, 0x5390589168f06c23,
            0x6b5dc677531c6abe, 0x396d5ac5e6cce75d,
        ]),
        y: FieldElement::from_limbs([
            0x6b3c947deb9a5dc0, 0x0eba709dc9a12a89,
            0xb0f25aac1fabf1b7, 0x004fdf324318914c,
        ]),
    },
]);

