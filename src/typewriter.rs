/// Steps through a fixed set of lines one character per tick.
///
/// Characters are counted as `char`s so multi-byte glyphs (progress bar blocks,
/// arrows) never get split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    lines: &'static [&'static str],
    line: usize,
    chars: usize,
}

impl Typewriter {
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self {
            lines,
            line: 0,
            chars: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.line >= self.lines.len()
    }

    /// Advance by one character. Finishing a line moves to the start of the
    /// next one. Returns false once everything has been typed.
    pub fn tick(&mut self) -> bool {
        let Some(current) = self.lines.get(self.line) else {
            return false;
        };
        if self.chars < current.chars().count() {
            self.chars += 1;
        } else {
            self.line += 1;
            self.chars = 0;
        }
        !self.is_done()
    }

    pub fn finish(&mut self) {
        self.line = self.lines.len();
        self.chars = 0;
    }

    pub fn text(&self) -> String {
        let mut out = self.lines[..self.line.min(self.lines.len())]
            .iter()
            .map(|l| format!("{l}\n"))
            .collect::<String>();
        if let Some(current) = self.lines.get(self.line) {
            out.extend(current.chars().take(self.chars));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LINES: &[&str] = &["$ ls", "", "> ██ 1"];

    #[test]
    fn test_types_character_by_character() {
        let mut tw = Typewriter::new(LINES);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "$");
        tw.tick();
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "$ ls");
        // line complete, next tick starts a new line
        tw.tick();
        assert_eq!(tw.text(), "$ ls\n");
        // empty line
        tw.tick();
        assert_eq!(tw.text(), "$ ls\n\n");
        tw.tick();
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "$ ls\n\n> █");
    }

    #[test]
    fn test_runs_to_completion() {
        let mut tw = Typewriter::new(LINES);
        let mut ticks = 0;
        while tw.tick() {
            ticks += 1;
            assert!(ticks < 100, "typewriter should terminate");
        }
        assert!(tw.is_done());
        assert_eq!(tw.text(), "$ ls\n\n> ██ 1\n");
        assert!(!tw.tick());
    }

    #[test]
    fn test_finish_skips_ahead() {
        let mut tw = Typewriter::new(LINES);
        tw.tick();
        tw.finish();
        assert!(tw.is_done());
        assert_eq!(tw.text(), "$ ls\n\n> ██ 1\n");
    }

    #[test]
    fn test_empty_lines() {
        let mut tw = Typewriter::new(&[]);
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.text(), "");
    }
}
