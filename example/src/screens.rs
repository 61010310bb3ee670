//! Stateless leaf screens of the demo app.
//!
//! Each screen takes its intents as callbacks and returns a [`ScreenView`];
//! invoking a button is the only side effect any of them has.
//!
//! [`ScreenView`]: crate::view::ScreenView

mod home;
mod number_detail;
mod number_list;

pub use home::{HomeViewArgs, home_view};
pub use number_detail::{NumberDetailViewArgs, number_detail_view};
pub use number_list::{NUMBERS, NumberListViewArgs, number_list_view};
