// Static 64-entry RGBA color tables
//
// Pixels are packed 0xAABBGGRR. Color emphasis blends per channel between
// the base and emphasis tables; grayscale replaces the base table
// outright. No NTSC signal modeling, these are fixed decodes.

/// Base colors.
pub(super) const BASE_PALETTE: [u32; 64] = [
    0xFF757575, 0xFF8F1B27, 0xFFAB0000, 0xFF9F0047, 0xFF77008F,
    0xFF1300AB, 0xFF0000A7, 0xFF0B007F, 0xFF002F43, 0xFF004700,
    0xFF005100, 0xFF173F00, 0xFF5F3F1B, 0xFF000000, 0xFF050505,
    0xFF050505, 0xFFBCBCBC, 0xFFEF7300, 0xFFEF3B23, 0xFFF30083,
    0xFFBF00BF, 0xFF5B00E7, 0xFF002BDB, 0xFF0F4FCB, 0xFF00738B,
    0xFF009700, 0xFF00AB00, 0xFF3B9300, 0xFF8B8300, 0xFF111111,
    0xFF090909, 0xFF090909, 0xFFFFFFFF, 0xFFFFBF3F, 0xFFFF975F,
    0xFFF78BA7, 0xFFFF7BF7, 0xFFB777FF, 0xFF6377FF, 0xFF3B9BFF,
    0xFF3FBFF3, 0xFF13D383, 0xFF4BDF4F, 0xFF98F858, 0xFFDBEB00,
    0xFF666666, 0xFF0D0D0D, 0xFF0D0D0D, 0xFFFFFFFF, 0xFFFFE7AB,
    0xFFFFD7C7, 0xFFFFCBD7, 0xFFFFC7FF, 0xFFDBC7FF, 0xFFB3BFFF,
    0xFFABDBFF, 0xFFA3E7FF, 0xFFA3FFE3, 0xFFBFF3AB, 0xFFCFFFB3,
    0xFFF3FF9F, 0xFFDDDDDD, 0xFF111111, 0xFF111111,
];

/// Grayscale variant selected by $2001 bit 0.
pub(super) const GRAY_PALETTE: [u32; 64] = [
    0xFF757575, 0xFF2B2B2B, 0xFF131313, 0xFF272727, 0xFF383838,
    0xFF353535, 0xFF313131, 0xFF272727, 0xFF2F2F2F, 0xFF292929,
    0xFF2F2F2F, 0xFF272727, 0xFF373737, 0xFF000000, 0xFF050505,
    0xFF050505, 0xFFBCBCBC, 0xFF5E5E5E, 0xFF484848, 0xFF424242,
    0xFF4E4E4E, 0xFF4F4F4F, 0xFF5A5A5A, 0xFF6C6C6C, 0xFF6D6D6D,
    0xFF585858, 0xFF646464, 0xFF5D5D5D, 0xFF5C5C5C, 0xFF111111,
    0xFF090909, 0xFF090909, 0xFFFFFFFF, 0xFFA0A0A0, 0xFF929292,
    0xFF9F9F9F, 0xFFAFAFAF, 0xFFA6A6A6, 0xFF9D9D9D, 0xFFADADAD,
    0xFFBFBFBF, 0xFFA5A5A5, 0xFFA3A3A3, 0xFFBDBDBD, 0xFFA2A2A2,
    0xFF656565, 0xFF0C0C0C, 0xFF0C0C0C, 0xFFFFFFFF, 0xFFD7D7D7,
    0xFFD6D6D6, 0xFFD4D4D4, 0xFFDEDEDE, 0xFFDADADA, 0xFFD0D0D0,
    0xFFE0E0E0, 0xFFE6E6E6, 0xFFECECEC, 0xFFD7D7D7, 0xFFE2E2E2,
    0xFFE0E0E0, 0xFFDDDDDD, 0xFF111111, 0xFF111111,
];

/// Brightened variant blended in per channel by the emphasis bits.
pub(super) const EMPHASIS_PALETTE: [u32; 64] = [
    0xFF8C8C8C, 0xFFAB202E, 0xFFCD0000, 0xFFBE0055, 0xFF8E00AB,
    0xFF1600CD, 0xFF0000C8, 0xFF0D0098, 0xFF003850, 0xFF005500,
    0xFF006100, 0xFF1B4B00, 0xFF724B20, 0xFF000000, 0xFF060606,
    0xFF060606, 0xFFE1E1E1, 0xFFFF8A00, 0xFFFF462A, 0xFFFF009D,
    0xFFE500E5, 0xFF6D00FF, 0xFF0033FF, 0xFF125EF3, 0xFF008AA6,
    0xFF00B500, 0xFF00CD00, 0xFF46B000, 0xFFA69D00, 0xFF141414,
    0xFF0A0A0A, 0xFF0A0A0A, 0xFFFFFFFF, 0xFFFFE54B, 0xFFFFB572,
    0xFFFFA6C8, 0xFFFF93FF, 0xFFDB8EFF, 0xFF768EFF, 0xFF46BAFF,
    0xFF4BE5FF, 0xFF16FD9D, 0xFF5AFF5E, 0xFFB6FF69, 0xFFFFFF00,
    0xFF7A7A7A, 0xFF0F0F0F, 0xFF0F0F0F, 0xFFFFFFFF, 0xFFFFFFCD,
    0xFFFFFFEE, 0xFFFFF3FF, 0xFFFFEEFF, 0xFFFFEEFF, 0xFFD6E5FF,
    0xFFCDFFFF, 0xFFC3FFFF, 0xFFC3FFFF, 0xFFE5FFCD, 0xFFF8FFD6,
    0xFFFFFFBE, 0xFFFFFFFF, 0xFF141414, 0xFF141414,
];
