use itertools::Itertools;

use crate::{
    records::{Dataset, User},
    sql::{DATETIME_FORMAT, ToInsert},
};

const RULE: &str = "-- =========================================";

/// Renders the whole dataset as one SQL script. Sections always appear in the
/// same order (users, surveys, questions, options, responses, histories) so
/// that foreign keys resolve when the script is run top to bottom.
pub fn render_script(dataset: &Dataset) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "-- Test data SQL script".to_string(),
        format!(
            "-- Generated at: {}",
            dataset.generated_at.format(DATETIME_FORMAT)
        ),
        format!("{RULE}\n"),
    ];

    let mut user_footer = vec![];
    if let Some(reference) = user_id_reference(&dataset.users) {
        user_footer.push(format!("\n-- USER ID reference: {reference}\n"));
    }
    push_section(&mut lines, &dataset.users, user_footer, true);
    push_section(&mut lines, &dataset.surveys, vec![], false);
    push_section(&mut lines, &dataset.questions, vec![], false);
    push_section(&mut lines, &dataset.options, vec![], false);
    push_section(&mut lines, &dataset.responses, vec![], false);
    push_section(&mut lines, &dataset.histories, vec![], false);

    lines.join("\n")
}

fn push_section<T: ToInsert>(
    lines: &mut Vec<String>,
    rows: &[T],
    footer: Vec<String>,
    first: bool,
) {
    lines.push(if first {
        RULE.to_string()
    } else {
        format!("\n{RULE}")
    });
    lines.push(format!("-- {} table data", T::TABLE));
    lines.push(format!("{RULE}\n"));

    for row in rows {
        lines.push(format!("{}\n", row.to_insert()));
    }

    lines.extend(footer);
    lines.push(format!("\n-- Total {} {} generated\n", rows.len(), T::NOUN));
}

/// Describes which id ranges hold which role, e.g. `1-8 = CREATOR, 9-10 =
/// ADMIN`.
fn user_id_reference(users: &[User]) -> Option<String> {
    if users.is_empty() {
        return None;
    }

    let chunks = users.iter().chunk_by(|user| user.role);
    let parts = chunks
        .into_iter()
        .filter_map(|(role, mut run)| {
            let first = run.next()?.id;
            let last = run.last().map(|user| user.id).unwrap_or(first);
            Some(if first == last {
                format!("{first} = {role}")
            } else {
                format!("{first}-{last} = {role}")
            })
        })
        .join(", ");

    Some(parts)
}
