mod window_invariants;
