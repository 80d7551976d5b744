//! Per-language trigger rule tables
//!
//! Each supported language maps to an ordered list of immutable
//! [`TriggerRule`] records. Table order matters: it is the order in which
//! firing rules append their suggestions, so it is preserved exactly.
//!
//! Triggers fall into three pattern families:
//!
//! - *bare keyword prefix*: fires on every incremental prefix of a keyword
//!   (`f`, `fu`, … `function`), which gives the sensation of progressive
//!   suggestion while the user types. Short prefixes are ambiguous on
//!   purpose; they still offer the most common expansion.
//! - *member/call-site prefix*: anchored on a literal qualifier such as
//!   `console.` so the template only has to supply the call remainder.
//! - *literal suffix*: a fixed fragment at the end of the line, e.g. `.map`
//!   or `with open`.
//!
//! All patterns are suffix-anchored against the trimmed last line (except
//! the two Python comprehension triggers, which match anywhere in the line)
//! and are plain alternations of literals, so matching cannot backtrack
//! pathologically.

use once_cell::sync::Lazy;
use regex::Regex;

/// What a firing rule contributes to the suggestion list.
#[derive(Debug, Clone, Copy)]
pub enum Expansion {
    /// Templates emitted whenever the trigger matches.
    Always(&'static [&'static str]),
    /// Templates emitted only when the cursor sits inside a class body.
    InsideClassBody(&'static [&'static str]),
}

/// An immutable (trigger, expansion) pair.
#[derive(Debug)]
pub struct TriggerRule {
    trigger: Regex,
    expansion: Expansion,
}

impl TriggerRule {
    fn new(pattern: &str, expansion: Expansion) -> Self {
        Self {
            // Patterns are fixed literals assembled below; a failure here is
            // a table bug, not an input condition.
            trigger: Regex::new(pattern).expect("trigger pattern is valid"),
            expansion,
        }
    }

    /// Test the trigger against the trimmed last line before the cursor.
    pub fn matches(&self, trimmed_line: &str) -> bool {
        self.trigger.is_match(trimmed_line)
    }

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }
}

/// Builds `\b(?:f|fu|...|function)$`, firing on every prefix of `word` with
/// at least `min` characters.
fn keyword_prefixes(word: &str, min: usize) -> String {
    let alts: Vec<&str> = (min..=word.len()).map(|n| &word[..n]).collect();
    format!(r"\b(?:{})$", alts.join("|"))
}

/// A literal qualifier followed by any prefix of `method` with at least
/// `min` characters, e.g. `console\.(?:l|lo|log)$`.
fn member_prefixes(qualifier: &str, method: &str, min: usize) -> String {
    let alts: Vec<&str> = (min..=method.len()).map(|n| &method[..n]).collect();
    format!(r"{}(?:{})$", regex::escape(qualifier), alts.join("|"))
}

static JAVASCRIPT_RULES: Lazy<Vec<TriggerRule>> = Lazy::new(|| {
    use Expansion::{Always, InsideClassBody};
    vec![
        // Keywords and statements
        TriggerRule::new(
            &keyword_prefixes("function", 1),
            Always(&["function name(params) {\n  \n}"]),
        ),
        TriggerRule::new(&keyword_prefixes("const", 1), Always(&["const name = value;"])),
        TriggerRule::new(&keyword_prefixes("let", 1), Always(&["let name = value;"])),
        TriggerRule::new(&keyword_prefixes("if", 1), Always(&["if (condition) {\n  \n}"])),
        TriggerRule::new(
            &keyword_prefixes("else", 1),
            Always(&["else {\n  \n}", "else if (condition) {\n  \n}"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("for", 1),
            Always(&[
                "for (let i = 0; i < array.length; i++) {\n  \n}",
                "for (const item of iterable) {\n  \n}",
                "for (const key in object) {\n  \n}",
            ]),
        ),
        TriggerRule::new(&keyword_prefixes("while", 1), Always(&["while (condition) {\n  \n}"])),
        TriggerRule::new(
            &keyword_prefixes("switch", 1),
            Always(&["switch (expression) {\n  case value:\n    \n    break;\n  default:\n    \n}"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("try", 1),
            Always(&["try {\n  \n} catch (error) {\n  console.error(error);\n}"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("class", 2),
            Always(&["class MyClass {\n  constructor() {\n    \n  }\n}"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("async", 1),
            Always(&["async function name(params) {\n  \n}"]),
        ),
        TriggerRule::new(&keyword_prefixes("await", 2), Always(&["await promise;"])),
        TriggerRule::new(&keyword_prefixes("return", 1), Always(&["return result;"])),
        TriggerRule::new(
            &keyword_prefixes("import", 3),
            Always(&["import moduleName from \"module\";"]),
        ),
        TriggerRule::new(&keyword_prefixes("export", 3), Always(&["export default name;"])),
        // Console methods
        TriggerRule::new(&member_prefixes("console.", "log", 1), Always(&["log();"])),
        TriggerRule::new(&member_prefixes("console.", "error", 1), Always(&["error();"])),
        TriggerRule::new(&member_prefixes("console.", "warn", 1), Always(&["warn();"])),
        TriggerRule::new(&member_prefixes("console.", "table", 1), Always(&["table();"])),
        // Common patterns and APIs
        TriggerRule::new(
            &keyword_prefixes("setTimeout", 4),
            Always(&["setTimeout(() => {\n  \n}, 1000);"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("setInterval", 4),
            Always(&["setInterval(() => {\n  \n}, 1000);"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("fetch", 3),
            Always(&[
                "fetch(\"URL\")\n  .then(response => response.json())\n  .then(data => console.log(data))\n  .catch(error => console.error(\"Error:\", error));",
            ]),
        ),
        TriggerRule::new(r"document\.querySelector$", Always(&["querySelector(\"selector\")"])),
        TriggerRule::new(
            r"addEventListener$",
            Always(&["addEventListener(\"event\", (e) => {\n  \n});"]),
        ),
        TriggerRule::new(r"\.map$", Always(&["map((element, index) => {\n  \n})"])),
        TriggerRule::new(r"\.filter$", Always(&["filter((element) => {\n  \n})"])),
        TriggerRule::new(
            r"\.reduce$",
            Always(&["reduce((accumulator, currentValue) => {\n  \n}, initialValue)"]),
        ),
        TriggerRule::new(r"\.forEach$", Always(&["forEach((element) => {\n  \n})"])),
        TriggerRule::new(r"Promise\.all$", Always(&["Promise.all(iterable);"])),
        TriggerRule::new(r"JSON\.stringify$", Always(&["JSON.stringify(object);"])),
        TriggerRule::new(r"JSON\.parse$", Always(&["JSON.parse(string);"])),
        // Contextual: class members
        TriggerRule::new(
            &keyword_prefixes("constructor", 1),
            InsideClassBody(&["constructor(params) {\n  \n}"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("method", 1),
            InsideClassBody(&["methodName(params) {\n  \n}"]),
        ),
        // Algorithm snippets
        TriggerRule::new(
            r"\bbinarySearch$",
            Always(&[
                "function binarySearch(arr, element) {\n  let low = 0;\n  let high = arr.length - 1;\n  while (low <= high) {\n    const mid = Math.floor((low + high) / 2);\n    if (arr[mid] === element) return mid;\n    if (arr[mid] < element) low = mid + 1;\n    else high = mid - 1;\n  }\n  return -1;\n}",
            ]),
        ),
        TriggerRule::new(
            r"\bquickSort$",
            Always(&[
                "function quickSort(arr) {\n  if (arr.length <= 1) return arr;\n  const pivot = arr[arr.length - 1];\n  const left = [];\n  const right = [];\n  for (let i = 0; i < arr.length - 1; i++) {\n    arr[i] < pivot ? left.push(arr[i]) : right.push(arr[i]);\n  }\n  return [...quickSort(left), pivot, ...quickSort(right)];\n}",
            ]),
        ),
    ]
});

static PYTHON_RULES: Lazy<Vec<TriggerRule>> = Lazy::new(|| {
    use Expansion::Always;
    vec![
        TriggerRule::new(
            &keyword_prefixes("def", 1),
            Always(&["def function_name(params):\n    pass"]),
        ),
        TriggerRule::new(&keyword_prefixes("if", 1), Always(&["if condition:\n    pass"])),
        TriggerRule::new(&keyword_prefixes("elif", 2), Always(&["elif condition:\n    pass"])),
        TriggerRule::new(&keyword_prefixes("else", 2), Always(&["else:\n    pass"])),
        TriggerRule::new(
            &keyword_prefixes("for", 1),
            Always(&["for item in iterable:\n    pass"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("while", 1),
            Always(&["while condition:\n    pass"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("try", 1),
            Always(&["try:\n    pass\nexcept Exception as e:\n    print(e)"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("class", 1),
            Always(&["class MyClass:\n    def __init__(self):\n        pass"]),
        ),
        TriggerRule::new(&keyword_prefixes("import", 2), Always(&["import module"])),
        TriggerRule::new(&keyword_prefixes("from", 2), Always(&["from module import name"])),
        TriggerRule::new(
            &keyword_prefixes("lambda", 1),
            Always(&["lambda arguments: expression"]),
        ),
        TriggerRule::new(
            r"with open$",
            Always(&["with open(\"file.txt\", \"r\") as f:\n    content = f.read()"]),
        ),
        TriggerRule::new(r"\[x for x in", Always(&["[x for x in iterable if condition]"])),
        TriggerRule::new(r"\{k:v for", Always(&["{k: v for k, v in iterable}"])),
        TriggerRule::new(
            r"\bbubbleSort$",
            Always(&[
                "def bubble_sort(arr):\n    n = len(arr)\n    for i in range(n):\n        for j in range(0, n-i-1):\n            if arr[j] > arr[j+1]:\n                arr[j], arr[j+1] = arr[j+1], arr[j]\n    return arr",
            ]),
        ),
        TriggerRule::new(
            r"\bmergeSort$",
            Always(&[
                "def merge_sort(arr):\n    if len(arr) > 1:\n        mid = len(arr) // 2\n        L = arr[:mid]\n        R = arr[mid:]\n        merge_sort(L)\n        merge_sort(R)\n        i = j = k = 0\n        while i < len(L) and j < len(R):\n            if L[i] < R[j]:\n                arr[k] = L[i]\n                i += 1\n            else:\n                arr[k] = R[j]\n                j += 1\n            k += 1\n        while i < len(L):\n            arr[k] = L[i]\n            i += 1\n            k += 1\n        while j < len(R):\n            arr[k] = R[j]\n            j += 1\n            k += 1\n    return arr",
            ]),
        ),
    ]
});

static JAVA_RULES: Lazy<Vec<TriggerRule>> = Lazy::new(|| {
    use Expansion::Always;
    vec![
        TriggerRule::new(&keyword_prefixes("public", 1), Always(&["public "])),
        TriggerRule::new(&keyword_prefixes("static", 1), Always(&["static "])),
        TriggerRule::new(&keyword_prefixes("void", 1), Always(&["void "])),
        TriggerRule::new(
            &keyword_prefixes("class", 1),
            Always(&[
                "class MyClass {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, World!\");\n    }\n}",
            ]),
        ),
        TriggerRule::new(
            &member_prefixes("System.out.", "println", 1),
            Always(&["println(\"\");"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("for", 1),
            Always(&[
                "for (int i = 0; i < n; i++) {\n  \n}",
                "for (String s : array) {\n  \n}",
            ]),
        ),
        TriggerRule::new(
            r"\btry$",
            Always(&["try {\n  \n} catch (Exception e) {\n  e.printStackTrace();\n}"]),
        ),
    ]
});

static RUST_RULES: Lazy<Vec<TriggerRule>> = Lazy::new(|| {
    use Expansion::Always;
    vec![
        TriggerRule::new(&keyword_prefixes("fn", 1), Always(&["fn main() {\n    \n}"])),
        TriggerRule::new(&keyword_prefixes("let", 1), Always(&["let mut name = value;"])),
        TriggerRule::new(&keyword_prefixes("if", 1), Always(&["if condition {\n    \n}"])),
        TriggerRule::new(
            &keyword_prefixes("for", 1),
            Always(&["for item in iterator {\n    \n}"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("match", 1),
            Always(&["match value {\n    pattern => code,\n    _ => default_code,\n}"]),
        ),
        TriggerRule::new(
            &keyword_prefixes("struct", 2),
            Always(&["struct MyStruct {\n    field: type,\n}"]),
        ),
        // Ported alternation: the source table jumps from `printl` straight
        // to `println!`, so the bare `println` step does not trigger.
        TriggerRule::new(
            r"\b(?:p|pr|pri|prin|print|printl|println!)$",
            Always(&["println!(\"\");"]),
        ),
    ]
});

/// Look up the rule table for a language identifier.
///
/// Unknown identifiers yield an empty table, never an error. TypeScript
/// intentionally shares the JavaScript table by reference: the trigger
/// vocabulary is identical, and the aliasing is explicit so the tables can
/// be split if the grammars ever diverge.
pub fn rules_for(language: &str) -> &'static [TriggerRule] {
    match language {
        "javascript" | "typescript" => JAVASCRIPT_RULES.as_slice(),
        "python" => PYTHON_RULES.as_slice(),
        "java" => JAVA_RULES.as_slice(),
        "rust" => RUST_RULES.as_slice(),
        _ => &[],
    }
}
