//! Owner of the demo's navigation state.
//!
//! # Responsibilities
//!
//! - Hold the [`NavigationStack`] of [`Screen`]s, starting at `[Home]`.
//! - Map every screen to its view, handing each screen callbacks that send
//!   intents through the coordinator's [`Navigator`].
//! - Apply queued intents and platform deactivations between frames.

use tessera_navigation::{
    Callback, CallbackWith, NavigationHost, NavigationQueue, NavigationStack, Navigator,
    navigation_stack,
};
use tracing::{debug, info};

use crate::{
    screen::Screen,
    screens::{
        HomeViewArgs, NumberDetailViewArgs, NumberListViewArgs, home_view, number_detail_view,
        number_list_view,
    },
    view::ScreenView,
};

pub struct AppCoordinator {
    stack: NavigationStack<Screen>,
    queue: NavigationQueue<Screen>,
    rendered_version: Option<u64>,
}

impl Default for AppCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl AppCoordinator {
    pub fn new() -> Self {
        Self {
            stack: NavigationStack::new(Screen::Home),
            queue: NavigationQueue::new(),
            rendered_version: None,
        }
    }

    pub fn stack(&self) -> &NavigationStack<Screen> {
        &self.stack
    }

    /// Sender for intents addressed to this coordinator.
    pub fn navigator(&self) -> Navigator<Screen> {
        self.queue.navigator()
    }

    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Pop the top screen. The home screen is never popped.
    pub fn pop(&mut self) -> Option<Screen> {
        self.stack.pop()
    }

    /// Drop all history but home. Returns `false` when already at home.
    pub fn reset_to_root(&mut self) -> bool {
        self.stack.reset_to_root()
    }

    /// Build the view for `screen`, wiring its intents to this coordinator.
    pub fn build_view(&self, screen: &Screen) -> ScreenView {
        let navigator = self.navigator();
        match *screen {
            Screen::Home => home_view(&HomeViewArgs {
                on_pick_number: show_numbers(navigator),
            }),
            Screen::NumberList => number_list_view(&NumberListViewArgs {
                on_number_selected: show_number(navigator),
            }),
            Screen::NumberDetail(number) => number_detail_view(&NumberDetailViewArgs {
                number,
                on_cancel: cancel(navigator.clone()),
                on_back_to_root: back_to_main(navigator),
            }),
        }
    }

    /// Fold the current stack and hand the chain to `host`.
    pub fn render<H>(&mut self, host: &mut H)
    where
        H: NavigationHost<Screen, ScreenView>,
    {
        let chain = navigation_stack(&self.stack, &self.queue.navigator(), |screen| {
            self.build_view(screen)
        });
        host.present(&chain);
        self.rendered_version = Some(self.stack.version());
    }

    /// Whether the stack changed since the last [`Self::render`].
    pub fn needs_render(&self) -> bool {
        self.rendered_version != Some(self.stack.version())
    }

    /// Apply every queued intent in send order. Returns whether the stack changed.
    pub fn process_events(&mut self) -> bool {
        let mut changed = false;
        for event in self.queue.drain() {
            debug!(?event, "applying navigation event");
            changed |= self.stack.apply(event);
        }
        if changed {
            info!(stack = ?self.stack.as_slice(), "navigation stack changed");
        }
        changed
    }
}

fn show_numbers(navigator: Navigator<Screen>) -> Callback {
    Callback::new(move || navigator.push(Screen::NumberList))
}

fn show_number(navigator: Navigator<Screen>) -> CallbackWith<i32> {
    CallbackWith::new(move |number| navigator.push(Screen::NumberDetail(number)))
}

fn cancel(navigator: Navigator<Screen>) -> Callback {
    Callback::new(move || navigator.pop())
}

fn back_to_main(navigator: Navigator<Screen>) -> Callback {
    Callback::new(move || navigator.reset_to_root())
}

#[cfg(test)]
mod tests {
    use tessera_navigation::{ChainNode, Presentation};

    use crate::{screen::Screen, view::ScreenView};

    use super::AppCoordinator;

    fn present(coordinator: &mut AppCoordinator) -> Presentation<Screen, ScreenView> {
        let mut presentation = Presentation::default();
        coordinator.render(&mut presentation);
        presentation
    }

    fn top(presentation: &Presentation<Screen, ScreenView>) -> &ScreenView {
        presentation.top().expect("presentation shows at least the root")
    }

    #[test]
    fn starts_at_home() {
        let mut coordinator = AppCoordinator::new();
        assert_eq!(coordinator.stack().as_slice(), &[Screen::Home]);
        assert!(coordinator.needs_render());
        let presentation = present(&mut coordinator);
        assert!(!coordinator.needs_render());
        assert_eq!(top(&presentation).title(), "Home View");
    }

    #[test]
    fn pop_keeps_home() {
        let mut coordinator = AppCoordinator::new();
        assert_eq!(coordinator.pop(), None);
        assert_eq!(coordinator.stack().as_slice(), &[Screen::Home]);

        coordinator.push(Screen::NumberList);
        assert_eq!(coordinator.pop(), Some(Screen::NumberList));
        assert_eq!(coordinator.stack().as_slice(), &[Screen::Home]);
    }

    #[test]
    fn every_screen_has_a_view() {
        let coordinator = AppCoordinator::new();
        let titles: Vec<String> = [Screen::Home, Screen::NumberList, Screen::NumberDetail(3)]
            .iter()
            .map(|screen| coordinator.build_view(screen).title().to_owned())
            .collect();
        assert_eq!(
            titles,
            vec!["Home View", "Number List View", "Number Detail View"]
        );
    }

    #[test]
    fn pick_number_pushes_list_with_active_home_link() {
        let mut coordinator = AppCoordinator::new();
        let presentation = present(&mut coordinator);
        assert!(top(&presentation).tap("Pick a Number"));
        assert!(coordinator.process_events());
        assert_eq!(
            coordinator.stack().as_slice(),
            &[Screen::Home, Screen::NumberList]
        );

        let chain = tessera_navigation::navigation_stack(
            coordinator.stack(),
            &coordinator.navigator(),
            |screen| coordinator.build_view(screen),
        );
        assert_eq!(chain.len(), 2);
        let home_link = chain.link().unwrap();
        assert!(home_link.is_active());
        let list = home_link.target();
        let list_link = list.link().unwrap();
        assert!(!list_link.is_active());
        assert!(matches!(list_link.target(), ChainNode::Terminal));
    }

    #[test]
    fn selecting_seven_shows_detail() {
        let mut coordinator = AppCoordinator::new();
        coordinator.push(Screen::NumberList);
        let presentation = present(&mut coordinator);
        assert!(top(&presentation).tap("Number 7"));
        coordinator.process_events();

        assert_eq!(
            coordinator.stack().as_slice(),
            &[Screen::Home, Screen::NumberList, Screen::NumberDetail(7)]
        );
        let presentation = present(&mut coordinator);
        assert_eq!(presentation.depth(), 3);
        assert_eq!(
            top(&presentation).texts().collect::<Vec<_>>(),
            vec!["Selected Number: 7"]
        );
    }

    fn at_detail_seven() -> AppCoordinator {
        let mut coordinator = AppCoordinator::new();
        coordinator.push(Screen::NumberList);
        coordinator.push(Screen::NumberDetail(7));
        coordinator
    }

    #[test]
    fn cancel_returns_to_list() {
        let mut coordinator = at_detail_seven();
        let presentation = present(&mut coordinator);
        assert!(top(&presentation).tap("Back"));
        coordinator.process_events();
        assert_eq!(
            coordinator.stack().as_slice(),
            &[Screen::Home, Screen::NumberList]
        );
    }

    #[test]
    fn back_gesture_truncates_at_list() {
        let mut coordinator = at_detail_seven();
        let presentation = present(&mut coordinator);
        assert!(presentation.back_gesture());
        assert!(coordinator.process_events());
        assert_eq!(
            coordinator.stack().as_slice(),
            &[Screen::Home, Screen::NumberList]
        );
        assert!(coordinator.needs_render());
    }

    #[test]
    fn to_home_view_resets_stack() {
        let mut coordinator = at_detail_seven();
        let presentation = present(&mut coordinator);
        assert!(top(&presentation).tap("To home view"));
        coordinator.process_events();
        assert_eq!(coordinator.stack().as_slice(), &[Screen::Home]);
    }

    #[test]
    fn reset_at_home_needs_no_render() {
        let mut coordinator = AppCoordinator::new();
        present(&mut coordinator);
        coordinator.navigator().reset_to_root();
        assert!(!coordinator.process_events());
        assert!(!coordinator.needs_render());
        assert!(!coordinator.reset_to_root());
        assert_eq!(coordinator.stack().as_slice(), &[Screen::Home]);
    }

    #[test]
    fn intents_apply_in_order_within_one_frame() {
        let mut coordinator = AppCoordinator::new();
        let navigator = coordinator.navigator();
        navigator.push(Screen::NumberList);
        navigator.push(Screen::NumberDetail(2));
        navigator.pop();
        navigator.push(Screen::NumberDetail(4));
        assert!(coordinator.process_events());
        assert_eq!(
            coordinator.stack().as_slice(),
            &[Screen::Home, Screen::NumberList, Screen::NumberDetail(4)]
        );
        assert!(!coordinator.process_events());
    }
}
