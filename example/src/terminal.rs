//! Terminal host for the demo.
//!
//! Draws the top screen of the presented chain and turns typed commands into
//! button taps or back gestures.

use std::{io, str::FromStr};

use console::{Style, Term, style};
use tessera_navigation::{ChainNode, NavigationHost, Presentation};
use thiserror::Error;
use tracing::debug;

use crate::{
    screen::Screen,
    view::{Element, ScreenView, Tone},
};

/// A command typed by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Tap the n-th button of the top screen, counting from 1.
    Tap(usize),
    /// Platform back gesture.
    Back,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unrecognized action `{0}`")]
    Unrecognized(String),
    #[error("no button {number} on this screen ({available} available)")]
    NoSuchButton { number: usize, available: usize },
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "b" | "back" => Ok(Self::Back),
            "q" | "quit" => Ok(Self::Quit),
            other => other
                .parse()
                .map(Self::Tap)
                .map_err(|_| InputError::Unrecognized(input.to_owned())),
        }
    }
}

/// What the session loop should do after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct TerminalHost {
    term: Term,
    presentation: Presentation<Screen, ScreenView>,
}

impl TerminalHost {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            presentation: Presentation::default(),
        }
    }

    pub fn presentation(&self) -> &Presentation<Screen, ScreenView> {
        &self.presentation
    }

    /// Carry out `action` against the presented screens.
    pub fn perform(&self, action: Action) -> Result<Flow, InputError> {
        match action {
            Action::Tap(number) => {
                let Some(view) = self.presentation.top() else {
                    return Err(InputError::NoSuchButton {
                        number,
                        available: 0,
                    });
                };
                let available = view.buttons().count();
                let (_, on_click) = number
                    .checked_sub(1)
                    .and_then(|position| view.buttons().nth(position))
                    .ok_or(InputError::NoSuchButton { number, available })?;
                on_click.call();
            }
            Action::Back => {
                if !self.presentation.back_gesture() {
                    debug!("back gesture ignored on root screen");
                }
            }
            Action::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Draw the top screen.
    pub fn draw(&self) -> io::Result<()> {
        let Some(view) = self.presentation.top() else {
            return Ok(());
        };
        let trail: Vec<&str> = self
            .presentation
            .screens()
            .iter()
            .map(ScreenView::title)
            .collect();

        self.term.write_line("")?;
        self.term
            .write_line(&style(trail.join(" › ")).dim().to_string())?;
        self.term
            .write_line(&style(view.title()).bold().underlined().to_string())?;

        let mut number = 0;
        for element in view.elements() {
            match element {
                Element::Text(content) => self.term.write_line(&format!("  {content}"))?,
                Element::Button { label, tone, .. } => {
                    number += 1;
                    let label = tone_style(*tone).apply_to(label);
                    self.term.write_line(&format!("  [{number}] {label}"))?;
                }
            }
        }

        if self.presentation.depth() > 1 {
            self.term
                .write_line(&style("  [b] navigate back").dim().to_string())?;
        }
        self.term.write_line(&style("  [q] quit").dim().to_string())
    }

    /// Show a one-line notice below the current screen.
    pub fn notice(&self, message: &str) -> io::Result<()> {
        self.term
            .write_line(&style(format!("! {message}")).yellow().to_string())
    }
}

impl NavigationHost<Screen, ScreenView> for TerminalHost {
    fn present(&mut self, root: &ChainNode<Screen, ScreenView>) {
        self.presentation = Presentation::from_chain(root);
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::new(),
        Tone::Primary => Style::new().blue().bold(),
        Tone::Destructive => Style::new().red().bold(),
        Tone::Confirm => Style::new().green().bold(),
    }
}
