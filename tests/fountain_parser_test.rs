use fountain_document::models::{Chunk, Conf, LineType, ParagraphType, Style};
use fountain_document::parser::fountain_parser::FountainParser;
use fountain_document::{parse, parse_with_conf, Document};

fn chunk(content: &str, styles: &[Style]) -> Chunk {
    Chunk::new(content, styles.to_vec())
}

fn line_texts(doc: &Document, paragraph: usize) -> Vec<(LineType, String)> {
    doc.body[paragraph]
        .lines
        .iter()
        .map(|l| (l.line_type, l.text()))
        .collect()
}

#[test]
fn test_doc_data() {
    let script = "Title: The One Day
Credit: Written By
Author: Some Body
Draft Date: 02/14/14
Quality: Pretty Good";
    let doc = parse(script);

    assert_eq!(doc.title, "The One Day");
    assert_eq!(doc.credit, "Written By");
    assert_eq!(doc.author, "Some Body");
    assert_eq!(doc.draft_date, "02/14/14");
    assert_eq!(doc.data.get("Quality").map(String::as_str), Some("Pretty Good"));
    assert!(doc.body.is_empty(), "没有正文时 body 应为空");
}

#[test]
fn test_title_and_credit_only() {
    let doc = parse("Title: The One Day\nCredit: Written By");
    assert_eq!(doc.title, "The One Day");
    assert_eq!(doc.credit, "Written By");
    assert!(doc.author.is_empty());
    assert!(doc.data.is_empty());
    assert!(doc.body.is_empty());
}

#[test]
fn test_repeated_key_last_wins() {
    let doc = parse("Quality: Bad\nQuality: Good\nTitle: A\nTitle: B");
    assert_eq!(doc.data["Quality"], "Good");
    assert_eq!(doc.title, "B");
}

#[test]
fn test_no_title_block() {
    let doc = parse("\nThe MEN ran down the street.");
    assert!(doc.title.is_empty());
    assert!(doc.credit.is_empty());
    assert!(doc.author.is_empty());
    assert!(doc.draft_date.is_empty());
    assert!(doc.data.is_empty());
    assert_eq!(doc.body.len(), 1);

    // 首行没有冒号时同样视为没有标题页
    let doc = parse("The man walks in.\n\nHe sits.");
    assert!(doc.title.is_empty());
    assert!(doc.data.is_empty());
    assert_eq!(doc.body.len(), 2);
}

#[test]
fn test_simple_italic() {
    let doc = parse("Title: X\n\nThe MEN ran down the *street*.");
    assert_eq!(doc.body.len(), 1);
    let paragraph = &doc.body[0];
    assert_eq!(paragraph.paragraph_type, ParagraphType::Action);
    assert_eq!(paragraph.lines.len(), 1);
    assert_eq!(paragraph.lines[0].line_type, LineType::Action);
    assert_eq!(
        paragraph.lines[0].chunks,
        vec![
            chunk("The MEN ran down the ", &[]),
            chunk("street", &[Style::Italic]),
            chunk(".", &[]),
        ]
    );
}

#[test]
fn test_doc_text_variants() {
    let script = "Title: The One Day

The MEN ran down the *street*. *They **jumped** into the _ditch_.*";
    let doc = parse(script);

    assert_eq!(doc.body.len(), 1);
    assert_eq!(
        doc.body[0].lines[0].chunks,
        vec![
            chunk("The MEN ran down the ", &[]),
            chunk("street", &[Style::Italic]),
            chunk(". ", &[]),
            chunk("They ", &[Style::Italic]),
            chunk("jumped", &[Style::Bold, Style::Italic]),
            chunk(" into the ", &[Style::Italic]),
            chunk("ditch", &[Style::Italic, Style::Underline]),
            chunk(".", &[Style::Italic]),
            chunk("", &[]),
        ]
    );
}

#[test]
fn test_style_order_is_fixed() {
    let doc = parse("Title: X\n\n_a **b *c");
    assert_eq!(
        doc.body[0].lines[0].chunks,
        vec![
            chunk("", &[]),
            chunk("a ", &[Style::Underline]),
            chunk("b ", &[Style::Bold, Style::Underline]),
            chunk("c", &[Style::Bold, Style::Italic, Style::Underline]),
        ]
    );
}

#[test]
fn test_comment_region() {
    let doc = parse("Title: X\n\nA [[note **here**]] b");
    assert_eq!(
        doc.body[0].lines[0].chunks,
        vec![
            chunk("A ", &[]),
            chunk("note ", &[Style::Comment]),
            chunk("here", &[Style::Bold, Style::Comment]),
            chunk("", &[Style::Comment]),
            chunk(" b", &[]),
        ]
    );
}

#[test]
fn test_unclosed_comment_runs_to_paragraph_end() {
    let doc = parse("Title: X\n\nx [[open\nstill\n\nafter");
    let lines = &doc.body[0].lines;
    assert_eq!(lines[1].chunks, vec![chunk("still", &[Style::Comment])]);
    assert_eq!(doc.body[1].lines[0].chunks, vec![chunk("after", &[])]);
}

#[test]
fn test_dialogue_with_parenthetical() {
    let doc = parse("Title: X\n\nBOY\n(beat)\nHello there.");
    assert_eq!(doc.body.len(), 1);
    assert_eq!(doc.body[0].paragraph_type, ParagraphType::Dialogue);
    assert_eq!(
        line_texts(&doc, 0),
        vec![
            (LineType::Speaker, "BOY".to_string()),
            (LineType::Parenthetical, "beat".to_string()),
            (LineType::Dialogue, "Hello there.".to_string()),
        ]
    );
    assert_eq!(doc.body[0].speaker().as_deref(), Some("BOY"));
}

#[test]
fn test_soft_break_lines() {
    let doc = parse("Title: X\n\nLine one\nLine two.");
    assert_eq!(doc.body.len(), 1);
    let lines = &doc.body[0].lines;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].chunks, vec![chunk("Line one", &[])]);
    assert_eq!(lines[1].chunks, vec![chunk("Line two.", &[])]);
}

#[test]
fn test_parenthetical_after_dialogue() {
    let doc = parse("Title: X\n\nBOY\nFirst line.\n(pause)\nSecond line.");
    assert_eq!(
        line_texts(&doc, 0),
        vec![
            (LineType::Speaker, "BOY".to_string()),
            (LineType::Dialogue, "First line.".to_string()),
            (LineType::Parenthetical, "pause".to_string()),
            (LineType::Dialogue, "Second line.".to_string()),
        ]
    );
}

#[test]
fn test_dialogue_styles() {
    let doc = parse("Title: X\n\nGIRL\n*Hi* there.");
    let dialogue = &doc.body[0].lines[1];
    assert_eq!(dialogue.line_type, LineType::Dialogue);
    assert_eq!(
        dialogue.chunks,
        vec![chunk("", &[]), chunk("Hi", &[Style::Italic]), chunk(" there.", &[])]
    );
}

#[test]
fn test_consecutive_dialogue_lines_share_a_line() {
    let doc = parse("Title: X\n\nBOY\nOne.\nTwo.");
    let lines = &doc.body[0].lines;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].chunks, vec![chunk("One.", &[]), chunk("Two.", &[])]);
}

#[test]
fn test_paragraph_types_and_count() {
    let doc = parse("Title: X\n\nOne thing.\n\nBOY\nHi.\n\n\nAnother thing.");
    let types: Vec<ParagraphType> = doc.body.iter().map(|p| p.paragraph_type).collect();
    assert_eq!(
        types,
        vec![ParagraphType::Action, ParagraphType::Dialogue, ParagraphType::Action]
    );
}

#[test]
fn test_speaker_line_with_digits_and_punctuation() {
    let doc = parse("Title: X\n\nMAN #2, O.S.!\nWho's there?");
    assert_eq!(doc.body[0].paragraph_type, ParagraphType::Dialogue);
    assert_eq!(doc.body[0].lines[0].line_type, LineType::Speaker);
    assert_eq!(doc.body[0].lines[0].text(), "MAN #2, O.S.!");
}

#[test]
fn test_uppercase_line_inside_action() {
    let doc = parse("Title: X\n\nThe door opens.\nBANG\nsilence follows.");
    assert_eq!(doc.body.len(), 1);
    assert_eq!(doc.body[0].paragraph_type, ParagraphType::Action);
    assert_eq!(
        line_texts(&doc, 0),
        vec![
            (LineType::Action, "The door opens.".to_string()),
            (LineType::Action, "BANG".to_string()),
            (LineType::Action, "silence follows.".to_string()),
        ]
    );
}

#[test]
fn test_speaker_without_dialogue() {
    let doc = parse("Title: X\n\nCUT TO:\n\nNext scene.");
    assert_eq!(doc.body.len(), 2);
    assert_eq!(line_texts(&doc, 0), vec![(LineType::Speaker, "CUT TO:".to_string())]);
}

#[test]
fn test_indent() {
    let doc = parse("\n   BOY\nHi.");
    assert_eq!(doc.body[0].paragraph_type, ParagraphType::Dialogue);
    assert_eq!(doc.body[0].lines[0].text(), "BOY");

    let doc = parse("\n  indented text");
    assert_eq!(
        doc.body[0].lines[0].chunks,
        vec![chunk("  ", &[]), chunk("indented text", &[])]
    );
}

#[test]
fn test_trailing_newlines() {
    let doc = parse("Title: X\n\nHello.\n");
    assert_eq!(doc.body.len(), 1);
    assert_eq!(doc.body[0].lines.len(), 1);

    let doc = parse("Title: X\n\nHello.\n\n\n");
    assert_eq!(doc.body.len(), 1);

    let doc = parse("Title: X\n\nBOY\nHi.\n");
    assert_eq!(doc.body.len(), 1);
    assert_eq!(doc.body[0].lines.len(), 2);
}

#[test]
fn test_truncated_input() {
    let doc = parse("Title: X\n\nBOY\n(unfinished");
    assert_eq!(
        line_texts(&doc, 0),
        vec![
            (LineType::Speaker, "BOY".to_string()),
            (LineType::Parenthetical, "unfinished".to_string()),
        ]
    );

    let doc = parse("Title: X\n\nopen *italic");
    assert_eq!(doc.body[0].lines[0].chunks[1], chunk("italic", &[Style::Italic]));
}

#[test]
fn test_styles_carry_across_soft_break() {
    let script = "Title: X\n\nsome *italic\ncontinues* here";
    let doc = parse(script);
    let lines = &doc.body[0].lines;
    assert_eq!(lines[0].chunks, vec![chunk("some ", &[]), chunk("italic", &[Style::Italic])]);
    assert_eq!(
        lines[1].chunks,
        vec![chunk("continues", &[Style::Italic]), chunk(" here", &[])]
    );

    let mut conf = Conf::default();
    conf.carry_styles_across_soft_break = false;
    let output = parse_with_conf(script, &conf);
    let lines = &output.document.body[0].lines;
    assert_eq!(
        lines[1].chunks,
        vec![chunk("continues", &[]), chunk(" here", &[Style::Italic])]
    );
}

#[test]
fn test_styles_reset_between_paragraphs() {
    let doc = parse("Title: X\n\n**bold\n\nplain");
    assert_eq!(doc.body[1].lines[0].chunks, vec![chunk("plain", &[])]);
}

#[test]
fn test_unicode_text() {
    let doc = parse("Title: 黑色爱情诗\n\n顾清 looks *away*.");
    assert_eq!(doc.title, "黑色爱情诗");
    assert_eq!(doc.body[0].lines[0].chunks[1], chunk("away", &[Style::Italic]));
}

#[test]
fn test_parse_output_properties() {
    let script = "Title: The One Day
Quality: Pretty Good

The MEN ran.

BOY
(beat)
Hello there.

GIRL
Hi.

BOY
Bye.";
    let mut parser = FountainParser::new();
    let result = parser.parse(script, &Conf::default());
    let props = &result.properties;

    assert_eq!(props.action_paragraphs, 1);
    assert_eq!(props.dialogue_paragraphs, 3);
    assert_eq!(props.parentheticals, 1);
    assert_eq!(props.characters["BOY"], vec![1, 3]);
    assert_eq!(props.characters["GIRL"], vec![2]);
    assert_eq!(props.title_keys, vec!["Quality".to_string(), "Title".to_string()]);
    assert_eq!(props.length_action, "The MEN ran.".chars().count());
    assert_eq!(props.length_dialogue, "Hello there.Hi.Bye.".chars().count());
    assert!(result.token_count > 0);

    let mut conf = Conf::default();
    conf.collect_properties = false;
    let result = parser.parse(script, &conf);
    assert!(result.properties.characters.is_empty());
    assert_eq!(result.document.body.len(), 4);
}
