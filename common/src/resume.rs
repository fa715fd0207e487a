//! レジュメビューアのモデル
//!
//! 本文とキーワード一覧を入力として受け取り、行ごとの装飾種別と
//! ハイライト区間を計算する。HTML文字列は生成しない。

use regex::{Regex, RegexBuilder};

/// 見出しとして扱うセクション名（部分一致）
const SECTION_TITLES: [&str; 6] = [
    "CONTACT",
    "EXPERIENCE",
    "EDUCATION",
    "TECHNICAL",
    "SOFT",
    "CERTIFICATIONS",
];

const BULLET: char = '•';

/// キーワード種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    Match,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub word: String,
    pub kind: KeywordKind,
}

impl Keyword {
    pub fn matched(word: &str) -> Self {
        Self { word: word.to_string(), kind: KeywordKind::Match }
    }

    pub fn missing(word: &str) -> Self {
        Self { word: word.to_string(), kind: KeywordKind::Missing }
    }

    /// 凡例ラベル
    pub fn legend_label(&self) -> String {
        match self.kind {
            KeywordKind::Match => self.word.clone(),
            KeywordKind::Missing => format!("{} (Missing)", self.word),
        }
    }
}

/// 行の装飾種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Blank,
    Name,
    Headline,
    Section,
    Position,
    Bullet,
    Body,
}

impl LineStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            LineStyle::Blank => "resume-blank",
            LineStyle::Name => "resume-name",
            LineStyle::Headline => "resume-headline",
            LineStyle::Section => "resume-section",
            LineStyle::Position => "resume-position",
            LineStyle::Bullet => "resume-bullet",
            LineStyle::Body => "resume-body",
        }
    }
}

/// ハイライト区間
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// 表示用の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeLine {
    pub style: LineStyle,
    pub segments: Vec<Segment>,
}

/// ビューアに渡すレジュメ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub text: String,
    pub keywords: Vec<Keyword>,
}

impl ResumeDocument {
    pub fn new(text: impl Into<String>, keywords: Vec<Keyword>) -> Self {
        Self { text: text.into(), keywords }
    }

    /// サンプルレジュメ（スコアリングサービスは本文を返さないため）
    pub fn sample() -> Self {
        Self::new(
            SAMPLE_RESUME,
            vec![
                Keyword::matched("JavaScript"),
                Keyword::matched("React"),
                Keyword::matched("Node.js"),
                Keyword::missing("Python"),
                Keyword::matched("Leadership"),
                Keyword::matched("Team Management"),
            ],
        )
    }

    pub fn missing_keywords(&self) -> Vec<&str> {
        self.keywords
            .iter()
            .filter(|k| k.kind == KeywordKind::Missing)
            .map(|k| k.word.as_str())
            .collect()
    }

    /// 不足スキルの警告文。不足が無ければ `None`
    pub fn missing_skills_message(&self) -> Option<String> {
        let missing = self.missing_keywords();
        if missing.is_empty() {
            return None;
        }
        Some(format!(
            "Candidate lacks {} experience which is required for this position.",
            missing.join(", ")
        ))
    }

    /// 一致キーワードの正規表現（大文字小文字無視・単語境界）
    fn match_pattern(&self) -> Option<Regex> {
        let mut words: Vec<&str> = self
            .keywords
            .iter()
            .filter(|k| k.kind == KeywordKind::Match && !k.word.trim().is_empty())
            .map(|k| k.word.as_str())
            .collect();
        if words.is_empty() {
            return None;
        }

        // 長い語を優先（"React Native" を "React" より先に）
        words.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");

        match RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("keyword pattern rejected: {}", e);
                None
            }
        }
    }

    /// 全行を装飾種別とハイライト区間に分解
    pub fn lines(&self) -> Vec<ResumeLine> {
        let pattern = self.match_pattern();
        let mut seen_name = false;
        let mut seen_headline = false;

        self.text
            .lines()
            .map(|line| {
                let style = classify_line(line, &mut seen_name, &mut seen_headline);
                ResumeLine {
                    style,
                    segments: highlight(line, pattern.as_ref()),
                }
            })
            .collect()
    }

    pub fn highlight_line(&self, line: &str) -> Vec<Segment> {
        highlight(line, self.match_pattern().as_ref())
    }
}

fn classify_line(line: &str, seen_name: &mut bool, seen_headline: &mut bool) -> LineStyle {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineStyle::Blank;
    }
    if !*seen_name {
        *seen_name = true;
        return LineStyle::Name;
    }
    if !*seen_headline {
        *seen_headline = true;
        if !trimmed.contains('|') {
            return LineStyle::Headline;
        }
    }
    if SECTION_TITLES.iter().any(|title| trimmed.contains(title)) {
        LineStyle::Section
    } else if trimmed.contains('|') {
        LineStyle::Position
    } else if trimmed.starts_with(BULLET) {
        LineStyle::Bullet
    } else {
        LineStyle::Body
    }
}

fn highlight(line: &str, pattern: Option<&Regex>) -> Vec<Segment> {
    let Some(re) = pattern else {
        return plain(line);
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(line) {
        if m.start() > last {
            segments.push(Segment { text: line[last..m.start()].to_string(), highlighted: false });
        }
        segments.push(Segment { text: m.as_str().to_string(), highlighted: true });
        last = m.end();
    }
    if last < line.len() {
        segments.push(Segment { text: line[last..].to_string(), highlighted: false });
    }
    segments
}

fn plain(line: &str) -> Vec<Segment> {
    if line.is_empty() {
        Vec::new()
    } else {
        vec![Segment { text: line.to_string(), highlighted: false }]
    }
}

const SAMPLE_RESUME: &str = "\
SARAH JOHNSON
Software Engineer

CONTACT INFORMATION
Email: sarah.johnson@email.com
Phone: +1 (555) 123-4567
Location: San Francisco, CA

EXPERIENCE

Senior Software Engineer | Tech Solutions Inc. | 2021 - Present
• Led a team of 5 developers in building scalable web applications using JavaScript and React
• Implemented modern frontend architectures resulting in 40% performance improvement
• Collaborated with cross-functional teams to deliver high-quality software solutions
• Mentored junior developers and conducted code reviews

Software Engineer | Innovation Labs | 2020 - 2021
• Developed full-stack applications using Node.js and React
• Participated in agile development processes and sprint planning
• Built RESTful APIs and integrated third-party services
• Maintained code quality through testing and documentation

EDUCATION
Master of Science in Computer Science | Stanford University | 2020
Bachelor of Science in Software Engineering | UC Berkeley | 2018

TECHNICAL SKILLS
• Frontend: JavaScript, React, TypeScript, HTML5, CSS3
• Backend: Node.js, Express.js, RESTful APIs
• Databases: PostgreSQL, MongoDB
• Tools: Git, Docker, AWS, Jenkins

SOFT SKILLS
• Leadership and team management
• Strong communication and collaboration abilities
• Problem-solving and analytical thinking
• Adaptability and continuous learning mindset

CERTIFICATIONS
• AWS Certified Developer Associate
• Scrum Master Certification
";
