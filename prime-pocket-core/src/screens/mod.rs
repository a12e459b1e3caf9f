//! Screen layouts
//!
//! Every screen is drawn straight onto a [`PixelSurface`]; positions are
//! derived from the surface size and the font line heights so the same
//! layout works on any panel.
//!
//! [`PixelSurface`]: prime_pocket_display::PixelSurface

pub mod battery;
pub mod fatal;
pub mod normal;

pub use battery::{enter_battery_screen, leave_battery_screen, render_battery};
pub use fatal::{fatal_message, render_fatal};
pub use normal::{render_banner, render_prime, BANNER};

#[cfg(test)]
pub(crate) mod testing {
    //! Recording surface shared by screen and device tests

    use prime_pocket_display::{Color, DisplayError, Font, PixelSurface};

    /// One recorded draw call
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Fill {
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: Color,
        },
        Outline {
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: Color,
        },
        Text {
            text: String,
            x: i32,
            y: i32,
            font: Font,
            foreground: Color,
            background: Color,
        },
    }

    /// 240x135 surface that records every call
    pub struct Recorder {
        pub ops: Vec<Op>,
        /// Fail every call once this many have succeeded
        pub fail_after: Option<usize>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self {
                ops: Vec::new(),
                fail_after: None,
            }
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn push(&mut self, op: Op) -> Result<(), DisplayError> {
            if self.fail_after.is_some_and(|limit| self.ops.len() >= limit) {
                return Err(DisplayError::Communication);
            }
            self.ops.push(op);
            Ok(())
        }
    }

    impl PixelSurface for Recorder {
        fn size(&self) -> (u32, u32) {
            (240, 135)
        }

        fn font_height(&self, font: Font) -> u32 {
            match font {
                Font::Message => 10,
                Font::Power | Font::Error => 13,
                Font::Prime => 32,
            }
        }

        fn fill_rect(
            &mut self,
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: Color,
        ) -> Result<(), DisplayError> {
            self.push(Op::Fill {
                x,
                y,
                width,
                height,
                color,
            })
        }

        fn draw_rect(
            &mut self,
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: Color,
        ) -> Result<(), DisplayError> {
            self.push(Op::Outline {
                x,
                y,
                width,
                height,
                color,
            })
        }

        fn draw_text(
            &mut self,
            text: &str,
            x: i32,
            y: i32,
            font: Font,
            foreground: Color,
            background: Color,
        ) -> Result<(), DisplayError> {
            self.push(Op::Text {
                text: text.to_string(),
                x,
                y,
                font,
                foreground,
                background,
            })
        }
    }
}
