/// Label used for any extension missing from the table.
pub const OTHER: &str = "Other";

fn ext_of(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// Map a file path to a language label by its extension (case-insensitive).
pub fn classify_language(path: &str) -> &'static str {
    match ext_of(path).as_str() {
        "py" => "Python",
        "php" => "PHP",
        "js" => "JavaScript",
        "java" => "Java",
        "go" => "Go",
        "c" => "C",
        "cpp" => "C++",
        "html" => "HTML",
        "css" => "CSS",
        "sql" => "SQL",
        _ => OTHER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(classify_language("sqli/a.py"), "Python");
        assert_eq!(classify_language("x/b.php"), "PHP");
        assert_eq!(classify_language("x/c.js"), "JavaScript");
        assert_eq!(classify_language("x/D.java"), "Java");
        assert_eq!(classify_language("x/main.go"), "Go");
        assert_eq!(classify_language("x/bof.c"), "C");
        assert_eq!(classify_language("x/bof.cpp"), "C++");
        assert_eq!(classify_language("x/index.html"), "HTML");
        assert_eq!(classify_language("x/site.css"), "CSS");
        assert_eq!(classify_language("x/q.sql"), "SQL");
    }

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(classify_language("FOO/BAR.PY"), "Python");
        assert_eq!(classify_language("foo/Bar.Cpp"), "C++");
    }

    #[test]
    fn unknown_or_missing_extension_is_other() {
        assert_eq!(classify_language("sqli/a.unknownext"), OTHER);
        assert_eq!(classify_language("sqli/Makefile"), OTHER);
        assert_eq!(classify_language("sqli/trailing."), OTHER);
        assert_eq!(classify_language(""), OTHER);
    }

    #[test]
    fn only_final_segment_is_considered() {
        assert_eq!(classify_language("v1.py/README"), OTHER);
        assert_eq!(classify_language("a.b/c.go"), "Go");
    }

    #[test]
    fn last_dot_wins() {
        assert_eq!(classify_language("x/archive.tar.js"), "JavaScript");
        assert_eq!(classify_language("x/.hidden.py"), "Python");
    }
}
