//! The static token hint table.
//!
//! Built once on first use and never mutated afterwards, so concurrent
//! detections share it without locking.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::hint::LanguageHint;
use crate::language::Language::*;

/// Read-only mapping from token text to the hints that token carries.
///
/// Keys are stored lowercase and looked up case-insensitively; hints that
/// must distinguish casing do so through [`LanguageHint::exact_match`].
pub struct HintTable {
    entries: HashMap<&'static str, Vec<LanguageHint>>,
}

impl HintTable {
    /// Hints for `token`, matched case-insensitively, in application order.
    pub fn hints(&self, token: &str) -> Option<&[LanguageHint]> {
        self.entries
            .get(token.to_lowercase().as_str())
            .map(Vec::as_slice)
    }

    /// Iterate over every (key, hints) entry.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[LanguageHint])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of distinct token keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The process-wide hint table.
pub fn hint_table() -> &'static HintTable {
    &TABLE
}

static TABLE: LazyLock<HintTable> = LazyLock::new(|| {
    let mut entries: HashMap<&'static str, Vec<LanguageHint>> = HashMap::new();
    let mut insert = |token: &'static str, hints: Vec<LanguageHint>| {
        let clobbered = entries.insert(token, hints);
        debug_assert!(clobbered.is_none(), "duplicate table key {token:?}");
    };

    insert("<#", vec![LanguageHint::new(PowerShell)]);
    insert("~~~", vec![LanguageHint::new(Markdown)]);
    insert("```", vec![LanguageHint::new(Markdown)]);
    insert("$false", vec![LanguageHint::weighted(PowerShell, 2.0)]);
    insert("$true", vec![LanguageHint::weighted(PowerShell, 2.0)]);
    insert("##", vec![LanguageHint::weighted(Markdown, 0.3)]);
    insert("###", vec![LanguageHint::new(Markdown)]);
    insert(
        "#include",
        vec![LanguageHint::new(C), LanguageHint::new(CPlusPlus)],
    );
    insert("@__name__", vec![LanguageHint::decisive(Python)]);
    insert("@echo", vec![LanguageHint::new(Batch)]);
    insert(
        "<body",
        vec![LanguageHint::new(Html), LanguageHint::weighted(Xml, -0.5)],
    );
    insert(
        "<html",
        vec![LanguageHint::new(Html), LanguageHint::weighted(Xml, -0.5)],
    );
    insert(
        "<script",
        vec![LanguageHint::new(Html), LanguageHint::weighted(Xml, -0.5)],
    );
    insert("<iostream", vec![LanguageHint::new(CPlusPlus)]);
    insert("<?xml", vec![LanguageHint::decisive(Xml)]);
    insert("body", vec![LanguageHint::new(Css)]);
    insert(
        "class",
        vec![
            LanguageHint::new(CSharp),
            LanguageHint::new(CPlusPlus),
            LanguageHint::new(Java),
        ],
    );
    insert("console", vec![LanguageHint::new(JavaScript)]);
    insert("cout", vec![LanguageHint::new(CPlusPlus)]);
    insert("cin", vec![LanguageHint::new(CPlusPlus)]);
    insert("def", vec![LanguageHint::new(Python)]);
    insert("except", vec![LanguageHint::new(Python)]);
    insert("export", vec![LanguageHint::new(TypeScript)]);
    insert("end", vec![LanguageHint::new(VisualBasic)]);
    insert("endl", vec![LanguageHint::new(CPlusPlus)]);
    insert(
        "extends",
        vec![LanguageHint::new(Java), LanguageHint::new(TypeScript)],
    );
    insert("final", vec![LanguageHint::new(Python)]);
    insert("fn", vec![LanguageHint::new(Rust)]);
    insert("margin:", vec![LanguageHint::decisive(Css)]);
    insert("font-size:", vec![LanguageHint::decisive(Css)]);
    insert("func", vec![LanguageHint::new(Go)]);
    insert(
        "function",
        vec![LanguageHint::new(VisualBasic), LanguageHint::new(JavaScript)],
    );
    insert("integer", vec![LanguageHint::new(VisualBasic)]);
    insert("internal", vec![LanguageHint::new(CSharp)]);
    insert(
        "import",
        vec![
            LanguageHint::new(Go),
            LanguageHint::new(Python),
            LanguageHint::new(Java),
        ],
    );
    insert("imports", vec![LanguageHint::new(VisualBasic)]);
    insert("insert", vec![LanguageHint::new(Sql)]);
    insert(
        "let",
        vec![
            LanguageHint::new(TypeScript),
            LanguageHint::new(JavaScript),
            LanguageHint::new(Rust),
            LanguageHint::new(FSharp),
        ],
    );
    insert(
        "main",
        vec![
            LanguageHint::new(CPlusPlus),
            LanguageHint::weighted(C, 0.9),
            LanguageHint::weighted(CSharp, 0.8),
        ],
    );
    insert("member", vec![LanguageHint::new(FSharp)]);
    insert(
        "module",
        vec![LanguageHint::new(VisualBasic), LanguageHint::new(FSharp)],
    );
    insert("mut", vec![LanguageHint::new(Rust)]);
    insert("mutable", vec![LanguageHint::new(FSharp)]);
    insert(
        "namespace",
        vec![LanguageHint::new(CSharp), LanguageHint::new(CPlusPlus)],
    );
    insert(
        "package",
        vec![LanguageHint::new(Go), LanguageHint::new(Java)],
    );
    insert("print", vec![LanguageHint::new(Python)]);
    insert(
        "printf",
        vec![LanguageHint::new(C), LanguageHint::weighted(CPlusPlus, 0.9)],
    );
    insert("printfn", vec![LanguageHint::new(FSharp)]);
    insert("println", vec![LanguageHint::new(Rust)]);
    insert(
        "public",
        vec![
            LanguageHint::new(CSharp),
            LanguageHint::new(VisualBasic),
            LanguageHint::new(Java),
            LanguageHint::new(CPlusPlus),
        ],
    );
    insert("raise", vec![LanguageHint::new(Python)]);
    insert("range", vec![LanguageHint::new(Python)]);
    insert("require", vec![LanguageHint::new(JavaScript)]);
    insert("select", vec![LanguageHint::new(Sql)]);
    insert("string", vec![LanguageHint::exact(Java, "String")]);
    insert("sub", vec![LanguageHint::new(VisualBasic)]);
    insert("transient", vec![LanguageHint::new(Java)]);
    insert("use", vec![LanguageHint::new(Rust)]);
    insert("update", vec![LanguageHint::new(Sql)]);
    insert(
        "using",
        vec![LanguageHint::new(CSharp), LanguageHint::new(CPlusPlus)],
    );
    insert(
        "var",
        vec![LanguageHint::new(CSharp), LanguageHint::new(JavaScript)],
    );
    insert("where", vec![LanguageHint::new(Sql)]);
    insert("write-host", vec![LanguageHint::new(PowerShell)]);
    insert("write-output", vec![LanguageHint::new(PowerShell)]);
    insert(
        "winmain",
        vec![
            LanguageHint::new(CSharp),
            LanguageHint::new(CPlusPlus),
            LanguageHint::weighted(C, 0.9),
        ],
    );
    insert("xmlns", vec![LanguageHint::new(Xml)]);

    HintTable { entries }
});
