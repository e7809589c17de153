use std::{io::Read, str::FromStr};

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    point::Point,
};

/// Read a point count followed by that many `x y` integer pairs.
///
/// Tokens only need to be separated by whitespace, line breaks are not significant.
pub fn read_points(mut reader: impl Read) -> Result<Vec<Point>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let count: usize = match tokens.next() {
        Some(token) => parse(token, "point count")?,
        None => return Err(Error::invalid_input("expected a point count")),
    };
    if count == 0 {
        return Err(Error::invalid_input("at least one point is required"));
    }

    let mut points = Vec::with_capacity(count.min(text.len()));
    for i in 1..=count {
        let mut coordinate = |axis: &str| match tokens.next() {
            Some(token) => parse::<i64>(token, &format!("{} coordinate of point {}", axis, i)),
            None => Err(Error::invalid_input(format!(
                "expected {} points but input ended at point {}",
                count, i
            ))),
        };
        let x = coordinate("x")?;
        let y = coordinate("y")?;
        points.push(Point::new(x, y));
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!("Ignoring {} tokens after the last point", trailing);
    }
    debug!("Read {} points", points.len());
    Ok(points)
}

fn parse<T: FromStr>(token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::invalid_input(format!("invalid {}: {:?}", what, token)))
}
