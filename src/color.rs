/// Um dos três canais de cor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Sentido de um passo dos botões ▲/▼.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Os três canais RGB. Os valores ficam sempre em [0, 255].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorState {
    red: u8,
    green: u8,
    blue: u8,
}

/// Valores derivados do estado: cor composta e código hexadecimal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendition {
    pub swatch: [u8; 3],
    pub hex: String,
}

impl ColorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Incrementa ou decrementa um canal, dando a volta em 256.
    pub fn step(&mut self, channel: Channel, direction: Direction) {
        let value = self.channel_mut(channel);
        *value = match direction {
            Direction::Up => value.wrapping_add(1),
            Direction::Down => value.wrapping_sub(1),
        };
    }

    /// Confirmação de um campo de texto: valores fora de [0, 255] dão a volta.
    pub fn set_from_text(&mut self, channel: Channel, text: &str) {
        *self.channel_mut(channel) = parse_channel(text).rem_euclid(256) as u8;
    }

    /// Edição de um campo de texto: valores fora de [0, 255] saturam na borda.
    pub fn clamp_from_text(&mut self, channel: Channel, text: &str) {
        *self.channel_mut(channel) = parse_channel(text).clamp(0, 255) as u8;
    }

    /// Cor de fundo de um campo: só o próprio canal aceso.
    pub fn channel_rgb(&self, channel: Channel) -> [u8; 3] {
        match channel {
            Channel::Red => [self.red, 0, 0],
            Channel::Green => [0, self.green, 0],
            Channel::Blue => [0, 0, self.blue],
        }
    }

    pub fn render(&self) -> Rendition {
        Rendition {
            swatch: [self.red, self.green, self.blue],
            hex: format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue),
        }
    }
}

// Texto inválido (vazio, não numérico, fora do alcance de i32) vale 0.
fn parse_channel(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_at_both_ends() {
        let mut state = ColorState::new();
        state.step(Channel::Red, Direction::Down);
        assert_eq!(state.channel(Channel::Red), 255);
        state.step(Channel::Red, Direction::Up);
        assert_eq!(state.channel(Channel::Red), 0);

        state.set_from_text(Channel::Green, "255");
        state.step(Channel::Green, Direction::Up);
        assert_eq!(state.channel(Channel::Green), 0);
        state.step(Channel::Green, Direction::Down);
        assert_eq!(state.channel(Channel::Green), 255);
    }

    #[test]
    fn step_moves_one_unit() {
        let mut state = ColorState::new();
        state.set_from_text(Channel::Blue, "128");
        state.step(Channel::Blue, Direction::Up);
        assert_eq!(state.channel(Channel::Blue), 129);
        state.step(Channel::Blue, Direction::Down);
        state.step(Channel::Blue, Direction::Down);
        assert_eq!(state.channel(Channel::Blue), 127);
    }

    #[test]
    fn set_from_text_wraps() {
        let mut state = ColorState::new();
        state.set_from_text(Channel::Red, "-1");
        assert_eq!(state.channel(Channel::Red), 255);
        state.set_from_text(Channel::Red, "256");
        assert_eq!(state.channel(Channel::Red), 0);
        state.set_from_text(Channel::Red, "300");
        assert_eq!(state.channel(Channel::Red), 44);
        state.set_from_text(Channel::Red, "-300");
        assert_eq!(state.channel(Channel::Red), 212);
    }

    #[test]
    fn clamp_from_text_saturates() {
        let mut state = ColorState::new();
        state.clamp_from_text(Channel::Blue, "-5");
        assert_eq!(state.channel(Channel::Blue), 0);
        state.clamp_from_text(Channel::Blue, "999");
        assert_eq!(state.channel(Channel::Blue), 255);
        state.clamp_from_text(Channel::Blue, "128");
        assert_eq!(state.channel(Channel::Blue), 128);
    }

    #[test]
    fn clamp_from_text_is_idempotent() {
        let mut state = ColorState::new();
        state.clamp_from_text(Channel::Green, "200");
        let once = state.channel(Channel::Green);
        state.clamp_from_text(Channel::Green, "200");
        assert_eq!(state.channel(Channel::Green), once);
    }

    #[test]
    fn invalid_text_counts_as_zero() {
        let mut state = ColorState::new();
        state.set_from_text(Channel::Red, "137");
        state.set_from_text(Channel::Red, "abc");
        assert_eq!(state.channel(Channel::Red), 0);

        state.set_from_text(Channel::Red, "137");
        state.clamp_from_text(Channel::Red, "");
        assert_eq!(state.channel(Channel::Red), 0);

        // sem trim e limitado ao alcance de i32
        state.set_from_text(Channel::Red, " 5");
        assert_eq!(state.channel(Channel::Red), 0);
        state.set_from_text(Channel::Red, "123456789012");
        assert_eq!(state.channel(Channel::Red), 0);
    }

    #[test]
    fn render_formats_hex() {
        let mut state = ColorState::new();
        assert_eq!(state.render().hex, "#000000");

        state.set_from_text(Channel::Red, "255");
        state.set_from_text(Channel::Green, "255");
        state.set_from_text(Channel::Blue, "255");
        assert_eq!(state.render().hex, "#FFFFFF");

        state.set_from_text(Channel::Red, "26");
        state.set_from_text(Channel::Green, "43");
        state.set_from_text(Channel::Blue, "60");
        let rendition = state.render();
        assert_eq!(rendition.hex, "#1A2B3C");
        assert_eq!(rendition.swatch, [26, 43, 60]);
    }

    #[test]
    fn render_is_pure() {
        let mut state = ColorState::new();
        state.set_from_text(Channel::Red, "26");
        state.set_from_text(Channel::Green, "43");
        assert_eq!(state.render(), state.render());
    }

    #[test]
    fn channel_rgb_lights_only_its_channel() {
        let mut state = ColorState::new();
        state.set_from_text(Channel::Red, "26");
        state.set_from_text(Channel::Green, "43");
        state.set_from_text(Channel::Blue, "60");
        assert_eq!(state.channel_rgb(Channel::Red), [26, 0, 0]);
        assert_eq!(state.channel_rgb(Channel::Green), [0, 43, 0]);
        assert_eq!(state.channel_rgb(Channel::Blue), [0, 0, 60]);
    }
}
