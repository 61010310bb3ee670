use tessera_navigation::Callback;

use crate::view::{ScreenView, Tone};

/// Arguments for [`home_view`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeViewArgs {
    pub on_pick_number: Callback,
}

/// Landing screen with a single entry into the number picker.
pub fn home_view(args: &HomeViewArgs) -> ScreenView {
    ScreenView::new("Home View").button("Pick a Number", Tone::Primary, args.on_pick_number.clone())
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    use tessera_navigation::Callback;

    use super::{HomeViewArgs, home_view};

    #[test]
    fn pick_number_invokes_intent() {
        let picked = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&picked);
        let view = home_view(&HomeViewArgs {
            on_pick_number: Callback::new(move || flag.store(true, Ordering::SeqCst)),
        });

        assert_eq!(view.title(), "Home View");
        assert!(view.tap("Pick a Number"));
        assert!(picked.load(Ordering::SeqCst));
    }
}
