pub mod team;
pub mod player;
pub mod player_team;
pub mod fixture;
pub mod attendance;
pub mod league_team;
pub mod league_match;
pub mod league_player;
pub mod league_player_team_stat;

/*
 Players belong to any number of teams through player_team. A match may be tied
 to one team; the roster of a match is every player of that team.
 Nobody gets an attendance row when a match is created: "no row" is how the app
 tells who has not answered yet. The first answer inserts the row, later
 answers overwrite its status.
 League tables are a mirror of the external league site and are replaced as a
 whole by the importer.
 */
