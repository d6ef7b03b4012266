use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Concatenate the plain text of every EPUB chapter, separated by blank lines.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();

    if num_chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    let mut content = String::new();

    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }

        if let Some((chapter_content, _mime)) = doc.get_current_str() {
            let plain_text = extract_plain_text(&chapter_content);
            if !plain_text.is_empty() {
                if !content.is_empty() {
                    content.push_str("\n\n");
                }
                content.push_str(&plain_text);
            }
        }
    }

    if content.is_empty() {
        return Err(LoadError::EmptyDocument(path.display().to_string()));
    }

    Ok(LoadedDocument {
        text: content,
        source: format!("epub:{}", path.display()),
    })
}

/// Strip markup and the contents of `<head>`, `<style>` and `<script>`.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut tag = String::new();
    let mut in_tag = false;
    let mut skipping: Option<&'static str> = None;

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                let name = tag
                    .split(|c: char| c.is_whitespace() || c == '/')
                    .find(|part| !part.is_empty())
                    .unwrap_or("")
                    .to_ascii_lowercase();
                let closing = tag.starts_with('/');
                let self_closing = tag.trim_end().ends_with('/');
                match skipping {
                    Some(open) if closing && name == open => skipping = None,
                    None if !closing && !self_closing => {
                        skipping = ["head", "style", "script"]
                            .into_iter()
                            .find(|skip| *skip == name);
                    }
                    _ => {}
                }
                // Block-level tags end a line of text.
                if matches!(name.as_str(), "p" | "br" | "div" | "h1" | "h2" | "h3" | "li") {
                    result.push('\n');
                }
            }
            _ if in_tag => tag.push(c),
            _ if skipping.is_some() => {}
            _ => result.push(c),
        }
    }

    result
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
