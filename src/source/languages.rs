/// Language name for a file extension, covering the languages hosted
/// repositories most commonly report. Extensions are matched lower-cased.
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    let language = match extension.to_ascii_lowercase().as_str() {
        "rs" => "Rust",
        "py" | "pyi" => "Python",
        "ts" | "tsx" => "TypeScript",
        "js" | "jsx" | "mjs" | "cjs" => "JavaScript",
        "go" => "Go",
        "java" => "Java",
        "kt" | "kts" => "Kotlin",
        "swift" => "Swift",
        "rb" => "Ruby",
        "php" => "PHP",
        "c" | "h" => "C",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "C++",
        "cs" => "C#",
        "scala" => "Scala",
        "dart" => "Dart",
        "lua" => "Lua",
        "r" => "R",
        "ex" | "exs" => "Elixir",
        "hs" => "Haskell",
        "sh" | "bash" | "zsh" => "Shell",
        "ps1" => "PowerShell",
        "html" | "htm" => "HTML",
        "css" => "CSS",
        "scss" | "sass" => "SCSS",
        "vue" => "Vue",
        "svelte" => "Svelte",
        "sql" => "SQL",
        "ipynb" => "Jupyter Notebook",
        "dockerfile" => "Dockerfile",
        _ => return None,
    };
    Some(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_case_insensitively() {
        assert_eq!(language_for_extension("rs"), Some("Rust"));
        assert_eq!(language_for_extension("PY"), Some("Python"));
        assert_eq!(language_for_extension("tsx"), Some("TypeScript"));
    }

    #[test]
    fn data_files_have_no_language() {
        assert_eq!(language_for_extension("json"), None);
        assert_eq!(language_for_extension("md"), None);
    }
}
