use eframe::egui::{Align, Button, Color32, FontId, Key, Label, RichText, TextEdit, Ui};

use crate::color::Direction;
use crate::constants::*;

/// Texto exibido no campo de um canal.
pub struct ChannelInputData {
    pub text: String,
}

impl ChannelInputData {
    pub fn new(value: u8) -> Self {
        Self {
            text: value.to_string(),
        }
    }
}

/// O que o usuário fez com a linha de um canal neste quadro.
pub enum ChannelEvent {
    Stepped(Direction),
    Committed,
    Edited,
}

pub fn channel_input(
    ui: &mut Ui,
    label: &str,
    tint: Color32,
    fill: Color32,
    data: &mut ChannelInputData,
) -> Option<ChannelEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        ui.add_sized(
            [GUI_CHANNEL_LABEL_WIDTH, GUI_CHANNEL_ROW_HEIGHT],
            Label::new(
                RichText::new(label)
                    .size(GUI_CHANNEL_LABEL_FONT_SIZE)
                    .color(tint),
            ),
        );

        let response = ui
            .scope(|ui| {
                // o TextEdit pinta o fundo com extreme_bg_color
                ui.visuals_mut().extreme_bg_color = fill;
                ui.add_sized(
                    [GUI_CHANNEL_INPUT_WIDTH, GUI_CHANNEL_ROW_HEIGHT],
                    TextEdit::singleline(&mut data.text)
                        .font(FontId::proportional(GUI_CHANNEL_INPUT_FONT_SIZE))
                        .text_color(Color32::WHITE)
                        .horizontal_align(Align::Center),
                )
            })
            .inner;

        if response.changed() {
            event = Some(ChannelEvent::Edited);
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            event = Some(ChannelEvent::Committed);
        }

        ui.vertical(|ui| {
            let up = Button::new(RichText::new("▲").color(tint));
            if ui
                .add_sized([GUI_STEP_BUTTON_SIZE, GUI_STEP_BUTTON_SIZE], up)
                .clicked()
            {
                event = Some(ChannelEvent::Stepped(Direction::Up));
            }

            let down = Button::new(RichText::new("▼").color(tint));
            if ui
                .add_sized([GUI_STEP_BUTTON_SIZE, GUI_STEP_BUTTON_SIZE], down)
                .clicked()
            {
                event = Some(ChannelEvent::Stepped(Direction::Down));
            }
        });
    });

    event
}
