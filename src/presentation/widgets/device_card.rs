use ratatui::{prelude::*, widgets::*};

use crate::domain::catalog::Device;

/// Grid cell summarizing one device profile
#[derive(Clone, Debug)]
pub struct DeviceCard<'a> {
    device: &'a Device,
    highlight: bool,
    title_style: Style,
    highlight_style: Style,
}

impl<'a> DeviceCard<'a> {
    /// Border, name row, two figure rows and the hint row
    pub const HEIGHT: u16 = 6;

    pub fn new(device: &'a Device) -> Self {
        Self {
            device,
            highlight: false,
            title_style: Style::default().bold(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    fn body(&self) -> Text<'a> {
        let profile = &self.device.profile;
        Text::from(vec![
            Line::from(vec![
                Span::raw(format!("General {}%", profile.general)),
                Span::raw("  "),
                Span::raw(format!("Red Dot {}%", profile.red_dot)),
            ]),
            Line::from(vec![
                Span::raw(format!("Gyro {}", profile.gyro)),
                Span::raw("  "),
                Span::raw(format!("DPI {}", profile.dpi)),
            ]),
            Line::from("Enter: view settings".dim()),
        ])
    }
}

impl Widget for DeviceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.highlight {
            self.highlight_style
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(self.device.name.clone(), self.title_style));
        Paragraph::new(self.body())
            .block(block)
            .render(area, buf);
    }
}
