use archmage::prelude::*;

use super::{ShuffleTable, shuffle_tail, shuffle_tail_inplace};

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn shuffle_row_scalar(_token: ScalarToken, table: ShuffleTable, src: &[u8], dst: &mut [u8]) {
    shuffle_tail(table, src, dst);
}

pub(super) fn shuffle_row_inplace_scalar(_token: ScalarToken, table: ShuffleTable, row: &mut [u8]) {
    shuffle_tail_inplace(table, row);
}

// ===========================================================================
// Scalar contiguous wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn shuffle_copy_impl_scalar(t: ScalarToken, table: ShuffleTable, s: &[u8], d: &mut [u8]) {
    shuffle_row_scalar(t, table, s, d);
}
pub(super) fn shuffle_inplace_impl_scalar(t: ScalarToken, table: ShuffleTable, b: &mut [u8]) {
    shuffle_row_inplace_scalar(t, table, b);
}

// ===========================================================================
// Scalar strided wrappers
// ===========================================================================

pub(super) fn shuffle_strided_scalar(
    t: ScalarToken,
    table: ShuffleTable,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        shuffle_row_scalar(t, table, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
