use crate::galaxy::Galaxy;

pub const DEFAULT_STAR_MARKER: char = '*';

/// Draw the galaxy as `height` rows of `width` characters.
///
/// Each star marks the cell at its truncated coordinates: row `y`, column `x`.
pub fn render_chart(galaxy: &Galaxy, marker: char) -> String {
    let width = galaxy.width() as usize;
    let height = galaxy.height() as usize;
    let mut rows = vec![vec![' '; width]; height];

    for star in galaxy.stars().iter() {
        let (col, row) = (star.x as usize, star.y as usize);
        if let Some(cell) = rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = marker;
        }
    }

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per star: id, name and position
pub fn render_legend(galaxy: &Galaxy) -> String {
    galaxy
        .stars()
        .iter()
        .map(|star| {
            format!(
                "{:>4}  {:<20} ({:.2}, {:.2})",
                star.id, star.display_name, star.x, star.y
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
