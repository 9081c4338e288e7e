/// Parse a page range string like "1,3-5" into a sorted list of 0-indexed pages.
///
/// Input is 1-indexed (user-facing), output is 0-indexed. Ranges may be given
/// in either direction ("5-3" is the same as "3-5"); duplicates are removed.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, String> {
    let mut pages = Vec::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((a, b)) => (parse_page(a, page_count)?, parse_page(b, page_count)?),
            None => {
                let page = parse_page(part, page_count)?;
                (page, page)
            }
        };
        pages.extend(start.min(end) - 1..start.max(end));
    }

    if pages.is_empty() {
        return Err(format!("page range '{input}' selects no pages"));
    }

    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}

fn parse_page(text: &str, page_count: usize) -> Result<usize, String> {
    let text = text.trim();
    let page: usize = text
        .parse()
        .map_err(|_| format!("invalid page number: '{text}'"))?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    if page > page_count {
        return Err(format!(
            "page {page} exceeds document page count ({page_count})"
        ));
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page() {
        assert_eq!(parse_page_range("1", 5).unwrap(), vec![0]);
        assert_eq!(parse_page_range("3", 5).unwrap(), vec![2]);
    }

    #[test]
    fn page_range() {
        assert_eq!(parse_page_range("2-4", 5).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn reversed_range() {
        assert_eq!(parse_page_range("4-2", 5).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn mixed() {
        assert_eq!(
            parse_page_range("1-3,7,10-12", 12).unwrap(),
            vec![0, 1, 2, 6, 9, 10, 11]
        );
    }

    #[test]
    fn page_zero_invalid() {
        let err = parse_page_range("0", 5).unwrap_err();
        assert!(err.contains("invalid"));
    }

    #[test]
    fn page_exceeds_count() {
        let err = parse_page_range("2-6", 5).unwrap_err();
        assert!(err.contains("exceeds"));
    }

    #[test]
    fn garbage_rejected() {
        let err = parse_page_range("1,x", 5).unwrap_err();
        assert!(err.contains("'x'"));
    }

    #[test]
    fn empty_selection_rejected() {
        assert!(parse_page_range(" , ", 5).is_err());
    }

    #[test]
    fn duplicates_removed_and_whitespace_allowed() {
        assert_eq!(
            parse_page_range(" 1 , 3 - 5, 4 ", 5).unwrap(),
            vec![0, 2, 3, 4]
        );
    }
}
