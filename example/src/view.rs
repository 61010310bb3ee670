//! Plain value tree produced by the demo screens.
//!
//! Screens return a [`ScreenView`] describing what to show; hosts decide how
//! to draw it. Buttons carry their [`Callback`] so a host can invoke them.

use tessera_navigation::Callback;

/// Visual emphasis of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Plain,
    Primary,
    Destructive,
    Confirm,
}

/// One element of a screen body.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Text(String),
    Button {
        label: String,
        tone: Tone,
        on_click: Callback,
    },
}

/// Title plus body elements of one screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenView {
    title: String,
    elements: Vec<Element>,
}

impl ScreenView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.elements.push(Element::Text(content.into()));
        self
    }

    pub fn button(
        mut self,
        label: impl Into<String>,
        tone: Tone,
        on_click: impl Into<Callback>,
    ) -> Self {
        self.elements.push(Element::Button {
            label: label.into(),
            tone,
            on_click: on_click.into(),
        });
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Text contents in display order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text(content) => Some(content.as_str()),
            Element::Button { .. } => None,
        })
    }

    /// Button labels with their callbacks, in display order.
    pub fn buttons(&self) -> impl Iterator<Item = (&str, &Callback)> {
        self.elements.iter().filter_map(|element| match element {
            Element::Button {
                label, on_click, ..
            } => Some((label.as_str(), on_click)),
            Element::Text(_) => None,
        })
    }

    /// Invoke the first button labelled `label`. Returns `false` if none exists.
    pub fn tap(&self, label: &str) -> bool {
        match self.buttons().find(|(candidate, _)| *candidate == label) {
            Some((_, on_click)) => {
                on_click.call();
                true
            }
            None => false,
        }
    }
}
