pub mod moods;
