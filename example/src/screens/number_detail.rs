use tessera_navigation::Callback;

use crate::view::{ScreenView, Tone};

/// Arguments for [`number_detail_view`].
#[derive(Clone, Debug, PartialEq)]
pub struct NumberDetailViewArgs {
    pub number: i32,
    pub on_cancel: Callback,
    pub on_back_to_root: Callback,
}

/// Shows the picked number with a way back one step or all the way home.
pub fn number_detail_view(args: &NumberDetailViewArgs) -> ScreenView {
    ScreenView::new("Number Detail View")
        .text(format!("Selected Number: {}", args.number))
        .button("Back", Tone::Destructive, args.on_cancel.clone())
        .button("To home view", Tone::Confirm, args.on_back_to_root.clone())
}
