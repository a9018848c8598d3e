mod arrangement;
