//! Post loading module
//!
//! Reads every `.md` file in the posts directory, parses and renders it,
//! and returns the collection sorted newest first. A missing directory
//! yields an empty set; an unparsable file is skipped with a warning so
//! one bad post cannot take the site down.

use super::post::{parse_post, slug_from_stem, Post};
use crate::logger;
use std::path::Path;

/// Load and sort all posts under `posts_dir`
pub fn load_posts(posts_dir: &str) -> Vec<Post> {
    let dir = Path::new(posts_dir);
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            logger::log_warning(&format!(
                "Posts directory '{posts_dir}' not readable ({e}); blog starts empty"
            ));
            return Vec::new();
        }
    };

    let mut posts = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let slug = slug_from_stem(stem);

        let source = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                logger::log_warning(&format!("Skipping post '{}': {e}", path.display()));
                continue;
            }
        };
        match parse_post(&slug, &source) {
            Ok(post) => posts.push(post),
            Err(e) => {
                logger::log_warning(&format!("Skipping post '{}': {e}", path.display()));
            }
        }
    }

    // Newest first; title breaks date ties so the order is stable
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        write!(
            f,
            "+++\ntitle = \"{title}\"\ndate = \"{date}\"\n+++\nbody of {title}\n"
        )
        .unwrap();
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "older.md", "Older", "2013-01-01");
        write_post(dir.path(), "newer.md", "Newer", "2013-06-01");

        let posts = load_posts(dir.path().to_str().unwrap());
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Newer");
        assert_eq!(posts[1].title, "Older");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        assert!(load_posts("definitely/not/here").is_empty());
    }

    #[test]
    fn test_bad_post_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "good.md", "Good", "2013-01-01");
        std::fs::write(dir.path().join("bad.md"), "no front matter at all").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not markdown").unwrap();

        let posts = load_posts(dir.path().to_str().unwrap());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
    }
}
