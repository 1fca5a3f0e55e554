mod streak_analysis;
