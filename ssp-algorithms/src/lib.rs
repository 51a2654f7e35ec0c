pub mod greedy_seeded;
