//! Look up a glossary term

use anyhow::Result;

use crate::Folio;

/// Print the definition of `term`
pub fn run(folio: &Folio, term: &str) -> Result<()> {
    let glossary = folio.glossary()?;
    match glossary.lookup(term) {
        Some(definition) => {
            println!("{}: {}", term, definition);
            Ok(())
        }
        None => anyhow::bail!("No glossary entry for: {}", term),
    }
}
