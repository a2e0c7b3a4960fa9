pub mod d100_tour_tracking;
