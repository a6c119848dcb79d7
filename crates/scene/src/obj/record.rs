use std::str::SplitWhitespace;

/// One input line, classified by its leading keyword. The variants carrying
/// data hold the remaining tokens of the line.
pub enum Record<'a> {
    Vertex(SplitWhitespace<'a>),
    Normal(SplitWhitespace<'a>),
    Face(SplitWhitespace<'a>),
    Ignored { keyword: Option<&'a str> },
}

impl<'a> From<&'a str> for Record<'a> {
    fn from(line: &'a str) -> Self {
        let mut components = line.split_whitespace();
        let Some(keyword) = components.next() else {
            return Record::Ignored { keyword: None };
        };

        match keyword {
            "v" | "vertex" => Record::Vertex(components),
            "vn" | "normal" => Record::Normal(components),
            "f" | "face" => Record::Face(components),
            _ => Record::Ignored {
                keyword: Some(keyword),
            },
        }
    }
}
