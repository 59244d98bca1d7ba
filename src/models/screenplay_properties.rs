use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::models::document::{Document, LineType, ParagraphType};
use crate::utils::FountainConstants;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenplayProperties {
    /// 角色名 -> 该角色对白段落在 body 中的下标
    pub characters: HashMap<String, Vec<usize>>,
    pub title_keys: Vec<String>,
    pub action_paragraphs: usize,
    pub dialogue_paragraphs: usize,
    pub parentheticals: usize,
    /// 动作文本字符数
    pub length_action: usize,
    /// 对白文本字符数
    pub length_dialogue: usize,
}

impl ScreenplayProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(doc: &Document) -> Self {
        let mut props = ScreenplayProperties::new();

        for (key, value) in [
            (FountainConstants::KEY_TITLE, &doc.title),
            (FountainConstants::KEY_CREDIT, &doc.credit),
            (FountainConstants::KEY_AUTHOR, &doc.author),
            (FountainConstants::KEY_DRAFT_DATE, &doc.draft_date),
        ] {
            if !value.is_empty() {
                props.title_keys.push(key.to_string());
            }
        }
        props.title_keys.extend(doc.data.keys().cloned());
        props.title_keys.sort();

        for (index, paragraph) in doc.body.iter().enumerate() {
            match paragraph.paragraph_type {
                ParagraphType::Action => props.action_paragraphs += 1,
                ParagraphType::Dialogue => {
                    props.dialogue_paragraphs += 1;
                    if let Some(name) = paragraph.speaker() {
                        props.characters.entry(name).or_default().push(index);
                    }
                }
            }

            for line in &paragraph.lines {
                let len = line.text().chars().count();
                match line.line_type {
                    LineType::Action => props.length_action += len,
                    LineType::Dialogue => props.length_dialogue += len,
                    LineType::Parenthetical => props.parentheticals += 1,
                    LineType::Speaker => {}
                }
            }
        }

        props
    }
}
