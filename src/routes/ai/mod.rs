pub mod opponent_analysis;
