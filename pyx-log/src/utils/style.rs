use nu_ansi_term::{Color, Style};

/// Styles used for each part of a console line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    ansi: bool,
}

impl Palette {
    pub(crate) fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.ansi {
            format!("{}", style.paint(text))
        } else {
            text.to_string()
        }
    }

    /// `[name]` in bold blue
    pub(crate) fn label(&self, name: &str) -> String {
        self.paint(Color::Blue.bold(), &format!("[{}]", name))
    }

    pub(crate) fn header(&self, msg: &str) -> String {
        self.paint(Style::new().bold(), &format!("===> {}", msg))
    }

    pub(crate) fn debug_open(&self, msg: &str) -> String {
        format!(
            "{}{}",
            self.paint(Color::Yellow.bold(), "D"),
            self.paint(Color::White.bold(), &format!(" => {}", msg))
        )
    }

    pub(crate) fn debug_close(&self) -> String {
        format!(
            "{}{}",
            self.paint(Color::White.bold(), "===# "),
            self.paint(Color::Yellow.bold(), "DEBUG")
        )
    }

    pub(crate) fn alert(&self, msg: &str) -> String {
        format!(
            "{}{}{}",
            self.paint(Color::Red.bold(), "A"),
            self.paint(Color::White.bold(), &format!(" => {} ", msg)),
            self.paint(Color::Red.bold(), "!!!!")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_has_no_escapes() {
        let palette = Palette::new(false);
        assert_eq!(palette.label("Me"), "[Me]");
        assert_eq!(palette.header("Init"), "===> Init");
        assert_eq!(palette.debug_open("x"), "D => x");
        assert_eq!(palette.debug_close(), "===# DEBUG");
        assert_eq!(palette.alert("fire"), "A => fire !!!!");
    }

    #[test]
    fn test_ansi_label_is_bold_blue() {
        let label = Palette::new(true).label("Me");
        assert!(label.starts_with("\u{1b}["));
        assert!(label.contains("[Me]"));
        assert!(label.ends_with("\u{1b}[0m"));
        assert_eq!(label, format!("{}", Color::Blue.bold().paint("[Me]")));
    }
}
