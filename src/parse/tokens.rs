//! Start-tag scanning.
//!
//! Runs the `html5ever` tokenizer over a document and keeps only start tags.
//! The tokenizer is used without a tree builder, so the sink itself switches
//! to raw-text states after `script`, `style` and friends, the same way a
//! standalone browser tokenizer does. Markup inside those elements never
//! produces tags.

use std::collections::VecDeque;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
    TokenizerResult,
};

/// A start tag with its attributes, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Lowercase tag name
    pub name: String,
    /// Lowercase attribute names with decoded values; duplicates already dropped
    pub attrs: Vec<(String, String)>,
    /// Written as `<tag ... />`
    pub self_closing: bool,
}

impl StartTag {
    /// Value of the first attribute called `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Tag> for StartTag {
    fn from(tag: Tag) -> Self {
        StartTag {
            name: tag.name.to_string(),
            attrs: tag
                .attrs
                .into_iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            self_closing: tag.self_closing,
        }
    }
}

/// Single-pass iterator over the start tags of a document.
pub struct StartTags {
    inner: std::collections::vec_deque::IntoIter<StartTag>,
}

impl Iterator for StartTags {
    type Item = StartTag;

    fn next(&mut self) -> Option<StartTag> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[derive(Default)]
struct StartTagSink {
    tags: VecDeque<StartTag>,
}

enum ContentModel {
    Markup,
    Raw(RawKind),
    Plaintext,
}

fn content_model(tag_name: &str) -> ContentModel {
    match tag_name {
        "script" => ContentModel::Raw(RawKind::ScriptData),
        "style" | "iframe" | "noembed" | "noframes" | "noscript" | "xmp" => {
            ContentModel::Raw(RawKind::Rawtext)
        }
        "title" | "textarea" => ContentModel::Raw(RawKind::Rcdata),
        "plaintext" => ContentModel::Plaintext,
        _ => ContentModel::Markup,
    }
}

impl TokenSink for StartTagSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let Token::TagToken(tag) = token else {
            return TokenSinkResult::Continue;
        };
        if !matches!(tag.kind, TagKind::StartTag) {
            return TokenSinkResult::Continue;
        }

        let model = content_model(&tag.name);
        self.tags.push_back(StartTag::from(tag));

        match model {
            ContentModel::Markup => TokenSinkResult::Continue,
            ContentModel::Raw(kind) => TokenSinkResult::RawData(kind),
            ContentModel::Plaintext => TokenSinkResult::Plaintext,
        }
    }
}

/// Tokenizes `page` and returns its start tags in document order.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected. Input
/// without any markup (JSON, plain text) yields an empty iterator.
pub fn start_tags(page: &[u8]) -> StartTags {
    let text = String::from_utf8_lossy(page);

    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(&text));

    let mut tokenizer = Tokenizer::new(StartTagSink::default(), TokenizerOpts::default());
    loop {
        match tokenizer.feed(&mut input) {
            TokenizerResult::Done => break,
            // StartTagSink never returns `TokenSinkResult::Script`. A `Script`
            // result only pauses the tokenizer, so feeding again resumes it.
            TokenizerResult::Script(()) => continue,
        }
    }
    tokenizer.end();

    log::trace!("Tokenizer produced {} start tags", tokenizer.sink.tags.len());
    StartTags {
        inner: tokenizer.sink.tags.into_iter(),
    }
}
