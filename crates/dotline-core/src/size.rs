// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Natural size of the indicator row.

use dotline_port::Size;

use crate::config::Configuration;

/// Width spanning every dot and the gaps between them; height of one dot.
///
/// Zero when there are no pages or either dot extent is zero.
#[allow(clippy::cast_precision_loss)]
pub fn intrinsic_size(config: &Configuration) -> Size {
    let dot = config.dot_size();
    if config.number_of_pages == 0 || dot.is_empty() {
        return Size::ZERO;
    }
    let padding = config.padding();
    let width = config.number_of_pages as f32 * (dot.width + padding) - padding;
    Size::new(width.max(0.0), dot.height)
}

/// Size the row wants inside `constraint`; the constraint is ignored.
pub fn size_that_fits(config: &Configuration, _constraint: Size) -> Size {
    intrinsic_size(config)
}
