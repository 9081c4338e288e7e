use std::fs;
use std::path::Path;

use regiontext_core::{Rect, Tolerance, UserRegion};

/// Regions used when none are given on the command line: the top-left
/// header corner and bottom-right footer corner of a US Letter page.
pub fn default_regions() -> Vec<UserRegion> {
    vec![
        UserRegion::new(Rect::new(0.0, 692.0, 150.0, 792.0), "Upper Left header"),
        UserRegion::new(Rect::new(450.0, 0.0, 612.0, 100.0), "Lower Right footer"),
    ]
}

/// Parse `left,bottom,right,top[:description]` into a region.
///
/// The description may itself contain colons; only the first one splits.
pub fn parse_region_arg(input: &str) -> Result<UserRegion, String> {
    let (coords, description) = match input.split_once(':') {
        Some((coords, description)) => (coords, description.trim()),
        None => (input, ""),
    };
    let values = parse_numbers(coords)?;
    let [left, bottom, right, top] = values[..] else {
        return Err(format!(
            "expected 4 coordinates 'left,bottom,right,top', got {}",
            values.len()
        ));
    };
    let rect = Rect::new(left, bottom, right, top);
    rect.validate().map_err(|e| e.to_string())?;
    Ok(UserRegion::new(rect, description))
}

/// Parse `horizontal,vertical` into a tolerance.
pub fn parse_tolerance(input: &str) -> Result<Tolerance, String> {
    let values = parse_numbers(input)?;
    let [horizontal, vertical] = values[..] else {
        return Err(format!(
            "expected 'horizontal,vertical', got {} values",
            values.len()
        ));
    };
    let tolerance = Tolerance::new(horizontal, vertical);
    tolerance.validate().map_err(|e| e.to_string())?;
    Ok(tolerance)
}

fn parse_numbers(input: &str) -> Result<Vec<f64>, String> {
    input
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| format!("invalid number: '{part}'"))
        })
        .collect()
}

/// Load a JSON array of regions, e.g.
/// `[{"rect": {"left": 0, "bottom": 692, "right": 150, "top": 792}, "description": "Header"}]`.
///
/// Returns `Err(1)` with a message printed to stderr on failure.
pub fn load_regions_file(path: &Path) -> Result<Vec<UserRegion>, i32> {
    let data = fs::read_to_string(path).map_err(|e| {
        eprintln!("Error: failed to read regions file {}: {e}", path.display());
        1
    })?;
    serde_json::from_str(&data).map_err(|e| {
        eprintln!("Error: invalid regions file {}: {e}", path.display());
        1
    })
}

/// Combine the command-line and file regions, falling back to
/// [`default_regions`] when neither supplies any.
pub fn collect_regions(
    cli_regions: &[UserRegion],
    cli_tolerance: Option<Tolerance>,
    file_regions: Vec<UserRegion>,
) -> Vec<UserRegion> {
    let mut regions: Vec<UserRegion> = cli_regions
        .iter()
        .cloned()
        .map(|r| match cli_tolerance {
            Some(tol) => r.with_tolerance(tol),
            None => r,
        })
        .collect();
    regions.extend(file_regions);
    if regions.is_empty() {
        regions = default_regions()
            .into_iter()
            .map(|r| match cli_tolerance {
                Some(tol) => r.with_tolerance(tol),
                None => r,
            })
            .collect();
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_arg_with_description() {
        let region = parse_region_arg("0,692,150,792:Upper Left header").unwrap();
        assert_eq!(region.rect, Rect::new(0.0, 692.0, 150.0, 792.0));
        assert_eq!(region.description, "Upper Left header");
        assert_eq!(region.tolerance, Tolerance::NONE);
    }

    #[test]
    fn region_arg_description_with_colon() {
        let region = parse_region_arg("1,2,3,4:Note: see footer").unwrap();
        assert_eq!(region.description, "Note: see footer");
    }

    #[test]
    fn region_arg_without_description() {
        let region = parse_region_arg(" 450 , 0 , 612.5 , 100 ").unwrap();
        assert_eq!(region.rect, Rect::new(450.0, 0.0, 612.5, 100.0));
        assert_eq!(region.description, "");
    }

    #[test]
    fn region_arg_wrong_arity() {
        let err = parse_region_arg("1,2,3").unwrap_err();
        assert!(err.contains("expected 4 coordinates"));
    }

    #[test]
    fn region_arg_not_a_number() {
        let err = parse_region_arg("1,2,x,4").unwrap_err();
        assert!(err.contains("invalid number: 'x'"));
    }

    #[test]
    fn region_arg_inverted() {
        let err = parse_region_arg("150,692,0,792").unwrap_err();
        assert!(err.contains("degenerate"));
    }

    #[test]
    fn tolerance_arg() {
        assert_eq!(parse_tolerance("4,2").unwrap(), Tolerance::LINK);
        assert!(parse_tolerance("4").is_err());
        assert!(parse_tolerance("-1,2").is_err());
    }

    #[test]
    fn collect_regions_defaults() {
        let regions = collect_regions(&[], None, Vec::new());
        assert_eq!(regions, default_regions());
    }

    #[test]
    fn collect_regions_defaults_take_cli_tolerance() {
        let regions = collect_regions(&[], Some(Tolerance::new(1.0, 1.0)), Vec::new());
        assert!(regions.iter().all(|r| r.tolerance == Tolerance::new(1.0, 1.0)));
    }

    #[test]
    fn collect_regions_cli_then_file() {
        let cli = vec![parse_region_arg("0,0,10,10:cli").unwrap()];
        let file = vec![
            UserRegion::new(Rect::new(5.0, 5.0, 20.0, 20.0), "file")
                .with_tolerance(Tolerance::new(2.0, 2.0)),
        ];
        let regions = collect_regions(&cli, Some(Tolerance::new(1.0, 0.5)), file);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].description, "cli");
        assert_eq!(regions[0].tolerance, Tolerance::new(1.0, 0.5));
        assert_eq!(regions[1].description, "file");
        assert_eq!(regions[1].tolerance, Tolerance::new(2.0, 2.0));
    }

    #[test]
    fn load_regions_file_missing() {
        assert_eq!(
            load_regions_file(Path::new("/nonexistent/regions.json")),
            Err(1)
        );
    }
}
