use std::io::Write;

use tabwriter::TabWriter;

use crate::circle::types::Context;

pub fn format_contexts(contexts: &[Context], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "NAME\tID\tCREATED").unwrap();
    }

    for context in contexts {
        writeln!(
            &mut tw,
            "{}\t{}\t{}",
            context.name,
            context.id,
            context.created_at.as_deref().unwrap_or("-")
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}
