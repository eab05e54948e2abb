use eframe::egui::{CentralPanel, Color32, Context, RichText, Sense, SidePanel, Stroke, Ui, Vec2};
use eframe::{App as EguiApp, Frame};

use crate::app::channel_input::*;
use crate::color::{Channel, ColorState, Rendition};
use crate::constants::*;

pub struct App {
    state: ColorState,

    red: ChannelInputData,
    green: ChannelInputData,
    blue: ChannelInputData,

    rendition: Rendition,
}

impl Default for App {
    fn default() -> Self {
        let state = ColorState::new();
        let rendition = state.render();

        Self {
            red: ChannelInputData::new(state.channel(Channel::Red)),
            green: ChannelInputData::new(state.channel(Channel::Green)),
            blue: ChannelInputData::new(state.channel(Channel::Blue)),
            state,
            rendition,
        }
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        SidePanel::right("swatch_panel")
            .exact_width(GUI_SWATCH_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                self.swatch_panel_content(ui);
            });

        CentralPanel::default().show(ctx, |ui| {
            self.channel_panel_content(ui);
        });
    }
}

impl App {
    fn channel_panel_content(&mut self, ui: &mut Ui) {
        let mut event = None;

        ui.add_space(GUI_ROW_SPACING);
        if let Some(ev) = channel_input(
            ui,
            "R",
            Color32::RED,
            rgb(self.state.channel_rgb(Channel::Red)),
            &mut self.red,
        ) {
            event = Some((Channel::Red, ev));
        }

        ui.add_space(GUI_ROW_SPACING);
        if let Some(ev) = channel_input(
            ui,
            "G",
            Color32::GREEN,
            rgb(self.state.channel_rgb(Channel::Green)),
            &mut self.green,
        ) {
            event = Some((Channel::Green, ev));
        }

        ui.add_space(GUI_ROW_SPACING);
        if let Some(ev) = channel_input(
            ui,
            "B",
            Color32::BLUE,
            rgb(self.state.channel_rgb(Channel::Blue)),
            &mut self.blue,
        ) {
            event = Some((Channel::Blue, ev));
        }

        if let Some((channel, ev)) = event {
            self.handle(channel, ev);
        }
    }

    fn swatch_panel_content(&mut self, ui: &mut Ui) {
        ui.add_space(GUI_ROW_SPACING);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(GUI_SWATCH_WIDTH, GUI_SWATCH_HEIGHT), Sense::hover());
        painter.rect_filled(response.rect, 0.0, rgb(self.rendition.swatch));
        painter.rect_stroke(
            response.rect,
            0.0,
            Stroke::new(GUI_SWATCH_BORDER_WIDTH, Color32::BLACK),
        );

        ui.add_space(GUI_ROW_SPACING);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&self.rendition.hex)
                    .size(GUI_HEX_FONT_SIZE)
                    .color(Color32::WHITE),
            );
        });
    }

    fn handle(&mut self, channel: Channel, event: ChannelEvent) {
        match event {
            ChannelEvent::Stepped(direction) => {
                self.commit_all();
                self.state.step(channel, direction);
            }
            ChannelEvent::Committed => {
                self.commit_all();
            }
            ChannelEvent::Edited => {
                self.state.clamp_from_text(Channel::Red, &self.red.text);
                self.state.clamp_from_text(Channel::Green, &self.green.text);
                self.state.clamp_from_text(Channel::Blue, &self.blue.text);
            }
        }

        self.refresh();
    }

    // Qualquer botão relê os três campos, não só o do canal acionado.
    fn commit_all(&mut self) {
        self.state.set_from_text(Channel::Red, &self.red.text);
        self.state.set_from_text(Channel::Green, &self.green.text);
        self.state.set_from_text(Channel::Blue, &self.blue.text);
    }

    fn refresh(&mut self) {
        self.red.text = self.state.channel(Channel::Red).to_string();
        self.green.text = self.state.channel(Channel::Green).to_string();
        self.blue.text = self.state.channel(Channel::Blue).to_string();
        self.rendition = self.state.render();
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}
