use anyhow::{anyhow, Context, Result};
use player_registry::PlayerEntry;
use projection_engine::{GameRecord, TeamId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tabular response returned by stats.nba.com endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub result_sets: Vec<ResultSet>,
}

/// One named table: column headers plus positional rows
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    pub row_set: Vec<Vec<Value>>,
}

/// A row of a [`ResultSet`], addressed by header name
pub struct Row<'a> {
    set: &'a ResultSet,
    values: &'a [Value],
}

impl StatsResponse {
    /// Look up a result set by name
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|set| set.name == name)
            .ok_or_else(|| anyhow!("Result set '{}' missing from response", name))
    }
}

impl ResultSet {
    /// Index of a column by header name
    pub fn column(&self, header: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| anyhow!("Column '{}' missing from result set '{}'", header, self.name))
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.row_set.iter().map(move |values| Row { set: self, values })
    }

    /// Decode a player game log (PlayerGameLog) into box-score records
    pub fn to_game_records(&self) -> Result<Vec<GameRecord>> {
        self.rows()
            .enumerate()
            .map(|(i, row)| {
                row.to_game_record().with_context(|| format!("Failed to decode game log row {}", i))
            })
            .collect()
    }

    /// Current team of the player described by a CommonPlayerInfo result set
    pub fn to_team_id(&self) -> Result<TeamId> {
        let row = self.rows().next().ok_or_else(|| anyhow!("Result set '{}' has no rows", self.name))?;
        row.count("TEAM_ID")
    }

    /// Decode the league player index (CommonAllPlayers)
    pub fn to_player_entries(&self) -> Result<Vec<PlayerEntry>> {
        let has_roster_status = self.column("ROSTERSTATUS").is_ok();

        self.rows()
            .map(|row| {
                let player_id = row.count("PERSON_ID")?;
                let name = row.text("DISPLAY_FIRST_LAST")?;
                let is_active = has_roster_status && row.count("ROSTERSTATUS")? > 0;
                Ok(PlayerEntry::new(player_id, name, is_active))
            })
            .collect()
    }
}

impl<'a> Row<'a> {
    fn value(&self, header: &str) -> Result<&'a Value> {
        let index = self.set.column(header)?;
        self.values
            .get(index)
            .ok_or_else(|| anyhow!("Row is shorter than the '{}' column", header))
    }

    fn to_game_record(&self) -> Result<GameRecord> {
        Ok(GameRecord {
            fgm: self.count("FGM")?,
            fga: self.count("FGA")?,
            ftm: self.count("FTM")?,
            fta: self.count("FTA")?,
            pts: self.count("PTS")?,
            reb: self.count("REB")?,
            ast: self.count("AST")?,
            stl: self.count("STL")?,
            blk: self.count("BLK")?,
            tov: self.count("TOV")?,
            fg3m: self.count("FG3M")?,
        })
    }

    /// Non-negative whole number; null cells read as 0
    pub fn count(&self, header: &str) -> Result<u32> {
        match self.value(header)? {
            Value::Null => Ok(0),
            Value::Number(n) => {
                let n = n
                    .as_u64()
                    .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
                    .ok_or_else(|| anyhow!("Column '{}' is not a non-negative integer: {}", header, n))?;
                u32::try_from(n).with_context(|| format!("Column '{}' out of range: {}", header, n))
            }
            Value::String(s) if s.is_empty() => Ok(0),
            Value::String(s) => {
                s.trim().parse().with_context(|| format!("Column '{}' is not a number: '{}'", header, s))
            }
            other => Err(anyhow!("Column '{}' has unexpected value {}", header, other)),
        }
    }

    pub fn text(&self, header: &str) -> Result<String> {
        match self.value(header)? {
            Value::String(s) => Ok(s.clone()),
            Value::Null => Ok(String::new()),
            other => Ok(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game_log_response() -> StatsResponse {
        serde_json::from_value(json!({
            "resource": "playergamelog",
            "parameters": { "PlayerID": 2544, "Season": "2025-26" },
            "resultSets": [{
                "name": "PlayerGameLog",
                "headers": ["SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL", "MIN",
                            "FGM", "FGA", "FG_PCT", "FG3M", "FG3A", "FG3_PCT", "FTM", "FTA", "FT_PCT",
                            "OREB", "DREB", "REB", "AST", "STL", "BLK", "TOV", "PF", "PTS", "PLUS_MINUS"],
                "rowSet": [
                    ["22025", 2544, "0022500210", "NOV 12, 2025", "LAL vs. SAC", "W", 34,
                     10, 19, 0.526, 2, 6, 0.333, 5, 6, 0.833, 1, 7, 8, 9, 1, 1, 4, 2, 27, 11],
                    ["22025", 2544, "0022500188", "NOV 10, 2025", "LAL @ GSW", "L", 31,
                     7, 18, 0.389, 1, 5, 0.2, 3, 4, 0.75, 0, 5, 5, 6, 2, 0, 3, 1, 18, -6]
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_game_log() {
        let response = game_log_response();
        let records = response.result_set("PlayerGameLog").unwrap().to_game_records().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fgm, 10);
        assert_eq!(records[0].fga, 19);
        assert_eq!(records[0].fg3m, 2);
        assert_eq!(records[0].reb, 8);
        assert_eq!(records[0].pts, 27);
        assert_eq!(records[1].tov, 3);
        assert_eq!(records[1].ftm, 3);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut response = game_log_response();
        response.result_sets[0].headers.retain(|h| h != "TOV");

        let err = response.result_sets[0].to_game_records().unwrap_err();
        assert!(format!("{err:#}").contains("Column 'TOV' missing"));
    }

    #[test]
    fn test_bad_cell_names_the_row() {
        let mut response = game_log_response();
        response.result_sets[0].row_set[1][24] = json!("lots");

        let err = response.result_sets[0].to_game_records().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("Failed to decode game log row 1"));
        assert!(message.contains("Column 'PTS' is not a number"));
    }

    #[test]
    fn test_null_cells_read_as_zero() {
        let set = ResultSet {
            name: "CommonPlayerInfo".to_string(),
            headers: vec!["PERSON_ID".to_string(), "TEAM_ID".to_string()],
            row_set: vec![vec![json!(1642000), Value::Null]],
        };
        assert_eq!(set.to_team_id().unwrap(), 0);
    }

    #[test]
    fn test_decode_team_id() {
        let response: StatsResponse = serde_json::from_value(json!({
            "resultSets": [
                { "name": "CommonPlayerInfo",
                  "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST", "TEAM_ID", "TEAM_ABBREVIATION"],
                  "rowSet": [[2544, "LeBron James", 1610612747, "LAL"]] },
                { "name": "PlayerHeadlineStats", "headers": ["PTS"], "rowSet": [[25.1]] }
            ]
        }))
        .unwrap();

        let team = response.result_set("CommonPlayerInfo").unwrap().to_team_id().unwrap();
        assert_eq!(team, 1610612747);
        assert!(response.result_set("AvailableSeasons").is_err());
    }

    #[test]
    fn test_empty_player_info_is_an_error() {
        let set = ResultSet { name: "CommonPlayerInfo".to_string(), headers: vec![], row_set: vec![] };
        assert!(set.to_team_id().is_err());
    }

    #[test]
    fn test_decode_player_index() {
        let response: StatsResponse = serde_json::from_value(json!({
            "resultSets": [{
                "name": "CommonAllPlayers",
                "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "TEAM_ID"],
                "rowSet": [
                    [2544, "James, LeBron", "LeBron James", 1, 1610612747],
                    [76001, "Abdelnaby, Alaa", "Alaa Abdelnaby", 0, 0]
                ]
            }]
        }))
        .unwrap();

        let players = response.result_set("CommonAllPlayers").unwrap().to_player_entries().unwrap();
        assert_eq!(players, vec![
            PlayerEntry::new(2544, "LeBron James", true),
            PlayerEntry::new(76001, "Alaa Abdelnaby", false),
        ]);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let set = ResultSet {
            name: "PlayerGameLog".to_string(),
            headers: vec!["PTS".to_string()],
            row_set: vec![vec![json!(-4)]],
        };
        let row = set.rows().next().unwrap();
        assert!(row.count("PTS").is_err());
    }
}
