// Reader for the saved Olympic medal feed (the `CIS_MedalNOCs` JSON file).

use crate::medals::*;

use log::debug;
use serde_json::Value as JSValue;
use snafu::prelude::*;
use std::fs;

/// Reads a saved copy of the Olympic medal feed.
///
/// The feed carries one entry per NOC, gender and sport; only the overall
/// rows (`gender == "TOT"`, `sport == "GLO"`) describe the medal table.
pub fn read_feed_json(path: &str) -> MedalResult<Vec<ParsedMedalRow>> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {
        path: path.to_string(),
    })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    parse_feed(&js)
}

pub fn parse_feed(js: &JSValue) -> MedalResult<Vec<ParsedMedalRow>> {
    let entries = js["medalNOC"].as_array().context(FeedShapeSnafu {
        message: "missing medalNOC array",
    })?;
    let mut res: Vec<ParsedMedalRow> = Vec::new();
    for e in entries.iter() {
        if e["gender"].as_str() != Some("TOT") || e["sport"].as_str() != Some("GLO") {
            continue;
        }
        let noc = e["org"].as_str().context(FeedShapeSnafu {
            message: format!("medalNOC entry without an org code: {:?}", e),
        })?;
        let gold = read_js_count(&e["gold"])?;
        let silver = read_js_count(&e["silver"])?;
        let bronze = read_js_count(&e["bronze"])?;
        let total = match &e["total"] {
            JSValue::Null => None,
            x => Some(read_js_count(x)?),
        };
        res.push(ParsedMedalRow {
            noc: Some(noc.to_string()),
            candidate: None,
            gold,
            silver,
            bronze,
            total,
        });
    }
    debug!("parse_feed: {:?} overall rows", res.len());
    Ok(res)
}

fn read_js_count(x: &JSValue) -> MedalResult<u64> {
    match x {
        JSValue::Number(n) => n.as_u64().context(FeedShapeSnafu {
            message: format!("not a medal count: {:?}", n),
        }),
        JSValue::String(s) => s.parse::<u64>().ok().context(FeedShapeSnafu {
            message: format!("not a medal count: {:?}", s),
        }),
        _ => FeedShapeSnafu {
            message: format!("not a medal count: {:?}", x),
        }
        .fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_only_the_overall_rows() {
        let js = json!({
            "medalNOC": [
                {"org": "USA", "gender": "TOT", "sport": "GLO", "gold": 40, "silver": 44, "bronze": 42, "total": 126},
                {"org": "USA", "gender": "W", "sport": "GLO", "gold": 26, "silver": 22, "bronze": 19},
                {"org": "FRA", "gender": "TOT", "sport": "JUD", "gold": 2, "silver": 0, "bronze": 2},
                {"org": "FRA", "gender": "TOT", "sport": "GLO", "gold": "16", "silver": "26", "bronze": "22"}
            ]
        });
        let rows = parse_feed(&js).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].noc.as_deref(), Some("USA"));
        assert_eq!(rows[0].total, Some(126));
        // Counts may come in as strings; the total may be absent.
        assert_eq!(rows[1].gold, 16);
        assert_eq!(rows[1].total, None);
    }

    #[test]
    fn a_feed_without_the_medal_block_is_rejected() {
        let js = json!({"results": []});
        assert!(matches!(
            parse_feed(&js),
            Err(MedalError::FeedShape { .. })
        ));
    }

    #[test]
    fn fractional_counts_are_rejected() {
        let js = json!({
            "medalNOC": [
                {"org": "USA", "gender": "TOT", "sport": "GLO", "gold": 1.5, "silver": 0, "bronze": 0}
            ]
        });
        assert!(matches!(
            parse_feed(&js),
            Err(MedalError::FeedShape { .. })
        ));
    }
}
