use minify_js::{minify, Session, TopLevelMode};
use sha2::{Digest, Sha256};
use std::{env, fs, path::Path};
use walkdir::WalkDir;

/// Bundles the stylesheets next to the templates into `static/styles.min.css`,
/// minifies `loader.js`, and exposes content hashes to the crate as
/// `STYLES_HASH` / `LOADER_HASH` for cache busting.
fn main() {
    let manifest = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| String::from("."));
    let templates = Path::new(&manifest).join("src/templates");
    let output = Path::new(&manifest).join("static");

    let mut styles_hash = String::new();
    let mut loader_hash = String::new();

    if templates.exists() {
        println!("cargo:rerun-if-changed={}", templates.display());
        for path in asset_files(&templates, &["css", "js"]) {
            println!("cargo:rerun-if-changed={}", path.display());
        }

        let _ = fs::create_dir_all(&output);
        styles_hash = build_css(&templates, &output).unwrap_or_default();
        loader_hash = build_loader(&templates, &output).unwrap_or_default();
    }

    println!("cargo:rustc-env=STYLES_HASH={}", styles_hash);
    println!("cargo:rustc-env=LOADER_HASH={}", loader_hash);
}

fn asset_files(root: &Path, extensions: &[&str]) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.contains(&ext))
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

fn build_css(templates: &Path, output: &Path) -> Option<String> {
    let base = templates.join("styles.css");
    let mut combined = fs::read_to_string(&base).unwrap_or_default();

    // Component styles after the base sheet so they can override it
    for file in asset_files(templates, &["css"]) {
        if file == base {
            continue;
        }
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        if content.trim().is_empty() {
            continue;
        }
        let rel = file.strip_prefix(templates).unwrap_or(&file);
        combined.push_str(&format!("\n/* {} */\n", rel.display()));
        combined.push_str(&content);
        combined.push('\n');
    }

    if combined.trim().is_empty() {
        return None;
    }

    let minified = minify_css(&combined);
    fs::write(output.join("styles.min.css"), &minified).ok()?;
    println!("cargo:warning=Built styles.min.css ({} bytes)", minified.len());
    Some(short_hash(&minified))
}

fn build_loader(templates: &Path, output: &Path) -> Option<String> {
    let source = fs::read_to_string(templates.join("loader.js")).ok()?;
    let minified = try_minify_js(&source).unwrap_or(source);
    fs::write(output.join("loader.js"), &minified).ok()?;
    println!("cargo:warning=Built loader.js ({} bytes)", minified.len());
    Some(short_hash(&minified))
}

fn short_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))[..8].to_string()
}

fn try_minify_js(source: &str) -> Option<String> {
    use std::panic::{catch_unwind, AssertUnwindSafe};
    catch_unwind(AssertUnwindSafe(|| {
        let session = Session::new();
        let mut out = Vec::new();
        minify(&session, TopLevelMode::Module, source.as_bytes(), &mut out).ok()?;
        String::from_utf8(out).ok()
    }))
    .ok()?
}

/// Strips comments and collapses whitespace; good enough for hand-written sheets
fn minify_css(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut chars = css.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            let mut prev = ' ';
            for n in chars.by_ref() {
                if prev == '*' && n == '/' {
                    break;
                }
                prev = n;
            }
            continue;
        }
        if c.is_whitespace() {
            let after_separator = out.is_empty() || out.ends_with(|ch: char| "{};:,>".contains(ch));
            let before_separator = chars.peek().is_some_and(|&n| "{};:,>".contains(n) || n.is_whitespace());
            if !after_separator && !before_separator {
                out.push(' ');
            }
            continue;
        }
        out.push(c);
    }
    out
}
