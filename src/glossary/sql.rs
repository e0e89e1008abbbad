// Fixed statement templates issued by GlossaryStore
//
// Caller-supplied text is only ever bound as a parameter. Substring search uses
// instr() rather than LIKE so that `%` and `_` in a query stay literal.

pub const LIST_ALL: &str = "SELECT name, definition FROM glossary_term ORDER BY id";

pub const SEARCH: &str =
    "SELECT name, definition FROM glossary_term WHERE instr(name_key, ?1) > 0 ORDER BY id";

pub const FIND: &str = "SELECT name, definition FROM glossary_term WHERE name_key = ?1";

pub const EXISTS: &str = "SELECT 1 FROM glossary_term WHERE name_key = ?1";

pub const INSERT: &str = r#"INSERT INTO glossary_term (name, name_key, definition, created_at)
    VALUES (?1, ?2, ?3, ?4)"#;

pub const DELETE: &str = "DELETE FROM glossary_term WHERE name_key = ?1";
