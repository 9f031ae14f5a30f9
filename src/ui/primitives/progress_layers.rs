//! Layered progress fill primitive
//!
//! Draws three rounded fill regions on top of each other:
//! - Background track spanning the whole bounds
//! - Secondary fill up to the secondary guide
//! - Primary fill up to the primary guide
//!
//! Guides are fractions of the widget width. The fills are inset by the
//! configured padding on all four sides, so a fill anchored at fraction `f`
//! spans `[padding, f * width - padding]` horizontally.
//!
//! The primitive also reports its own size: whenever the laid-out bounds
//! differ from the last drawn ones it publishes `on_resize` once.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::window;
use iced::{Background, Color, Element, Event, Length, Pixels, Rectangle, Size, Theme};

/// Layered progress fills
pub struct ProgressLayers<'a, Message> {
    primary: f32,
    secondary: f32,
    style: Style,
    height: f32,
    on_resize: Option<Box<dyn Fn(Size) -> Message + 'a>>,
}

impl<'a, Message> ProgressLayers<'a, Message> {
    pub const DEFAULT_HEIGHT: f32 = 24.0;

    /// Create the layers with primary and secondary guide fractions
    pub fn new(primary: f32, secondary: f32) -> Self {
        Self {
            primary,
            secondary,
            style: Style::default(),
            height: Self::DEFAULT_HEIGHT,
            on_resize: None,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into().0;
        self
    }

    /// Message produced when the drawn size changes
    pub fn on_resize(mut self, on_resize: impl Fn(Size) -> Message + 'a) -> Self {
        self.on_resize = Some(Box::new(on_resize));
        self
    }
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for ProgressLayers<'_, Message>
where
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fill,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, Length::Fill, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        if let Event::Window(window::Event::RedrawRequested(_now)) = event {
            let state = tree.state.downcast_mut::<State>();
            let size = layout.bounds().size();

            if state.last_size != Some(size) {
                state.last_size = Some(size);
                if let Some(on_resize) = &self.on_resize {
                    shell.publish(on_resize(size));
                }
            }
        }
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let border = Border {
            radius: self.style.corner_radius.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        };

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border,
                ..renderer::Quad::default()
            },
            Background::Color(self.style.background),
        );

        // Secondary sits under the primary fill
        let fills = [
            (self.secondary, self.style.secondary),
            (self.primary, self.style.primary),
        ];

        for (fraction, color) in fills {
            if let Some(fill) = fill_bounds(bounds, fraction, self.style.padding) {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: fill,
                        border,
                        ..renderer::Quad::default()
                    },
                    Background::Color(color),
                );
            }
        }
    }
}

impl<'a, Message, Renderer> From<ProgressLayers<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(layers: ProgressLayers<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(layers)
    }
}

/// Rectangle covered by a fill anchored at `fraction` of the bounds width
///
/// Returns `None` when the padded span is empty, which is also the case for
/// negative fractions.
pub fn fill_bounds(bounds: Rectangle, fraction: f32, padding: f32) -> Option<Rectangle> {
    let left = bounds.x + padding;
    let right = bounds.x + fraction * bounds.width - padding;
    let height = bounds.height - padding * 2.0;

    if right <= left || height <= 0.0 {
        return None;
    }

    Some(Rectangle {
        x: left,
        y: bounds.y + padding,
        width: right - left,
        height,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct State {
    last_size: Option<Size>,
}

/// Colors and shape of the three fill regions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub background: Color,
    pub primary: Color,
    pub secondary: Color,
    pub corner_radius: f32,
    /// Inset applied to the primary and secondary fills only
    pub padding: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            primary: Color::from_rgb(0.8, 0.2, 0.5),
            secondary: Color::from_rgba(0.5, 0.5, 0.5, 0.4),
            corner_radius: 0.0,
            padding: 0.0,
        }
    }
}
