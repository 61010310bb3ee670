use std::ops::RangeInclusive;

use tessera_navigation::CallbackWith;

use crate::view::{ScreenView, Tone};

/// Numbers offered by [`number_list_view`].
pub const NUMBERS: RangeInclusive<i32> = 1..=10;

/// Arguments for [`number_list_view`].
#[derive(Clone, Debug, PartialEq)]
pub struct NumberListViewArgs {
    pub on_number_selected: CallbackWith<i32>,
}

/// One button per entry of [`NUMBERS`].
pub fn number_list_view(args: &NumberListViewArgs) -> ScreenView {
    NUMBERS.fold(ScreenView::new("Number List View"), |view, number| {
        view.button(
            format!("Number {number}"),
            Tone::Plain,
            args.on_number_selected.bind(number),
        )
    })
}
