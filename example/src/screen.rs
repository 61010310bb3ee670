/// Screens of the demo app, with the parameters each one needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    NumberList,
    NumberDetail(i32),
}
