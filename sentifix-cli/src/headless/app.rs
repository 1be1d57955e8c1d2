use sentifix_core::{Analysis, Fixer};

/// One-shot analysis printed to stdout.
pub struct AppHeadless {
    fixer: Fixer,
}

impl AppHeadless {
    pub fn new(fixer: Fixer) -> Self {
        Self { fixer }
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        self.fixer.analyze(text)
    }

    pub fn run(&self, text: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
        let analysis = self.analyze(text);
        println!("{}", Self::render(&analysis, json)?);
        Ok(())
    }

    pub(crate) fn render(analysis: &Analysis, json: bool) -> Result<String, serde_json::Error> {
        if json {
            serde_json::to_string_pretty(analysis)
        } else {
            Ok(format!("{}\n{}", analysis.label(), analysis.message()))
        }
    }
}

#[cfg(test)]
mod tests {
    use sentifix_core::{Analysis, Outcome, RewrittenText, SentimentScore};

    use super::AppHeadless;

    fn negative() -> Analysis {
        Analysis {
            score: SentimentScore::new(-1.0, 1.0),
            outcome: Outcome::Rewritten(RewrittenText {
                tokens: vec!["This".into(), "is".into(), "frightful".into(), ".".into()],
                substitutions: Vec::new(),
            }),
        }
    }

    #[test]
    fn test_render_text() {
        let out = AppHeadless::render(&negative(), false).unwrap();
        assert_eq!(out, "Sentiment: Negative (Score: -1.00)\nFixed Text: This is frightful .");
    }

    #[test]
    fn test_render_json() {
        let out = AppHeadless::render(&negative(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["score"]["polarity"], -1.0);
        assert_eq!(value["outcome"]["Rewritten"]["tokens"][2], "frightful");
    }
}
