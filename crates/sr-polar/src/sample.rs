//! A bundled polar for a 42 ft cruising sloop, so demos and tests can route
//! without an external file.

use std::io::Cursor;

use crate::{load_polar_reader, PolarResult, PolarTable, DEFAULT_DELIMITER};

/// Semicolon-delimited cruiser polar, knots.
pub const CRUISER_42_CSV: &str = "\
TWA\\TWS;4;6;8;10;12;14;16;20;25\n\
0;0;0;0;0;0;0;0;0;0\n\
30;1.2;1.9;2.6;3.1;3.4;3.6;3.7;3.7;3.5\n\
40;2.6;3.9;4.9;5.6;6.0;6.2;6.3;6.4;6.2\n\
52;3.2;4.7;5.8;6.5;6.9;7.1;7.2;7.3;7.2\n\
60;3.5;5.0;6.1;6.8;7.2;7.4;7.5;7.6;7.6\n\
75;3.8;5.3;6.4;7.1;7.5;7.7;7.9;8.1;8.2\n\
90;3.9;5.4;6.5;7.2;7.6;7.9;8.1;8.5;8.8\n\
110;3.8;5.3;6.4;7.1;7.6;8.0;8.3;8.8;9.3\n\
120;3.6;5.1;6.2;7.0;7.5;7.9;8.2;8.9;9.6\n\
135;3.1;4.6;5.7;6.6;7.2;7.6;8.0;8.8;9.7\n\
150;2.6;3.9;5.0;5.9;6.6;7.1;7.5;8.3;9.2\n\
165;2.3;3.5;4.5;5.4;6.1;6.7;7.1;7.8;8.7\n\
180;2.1;3.2;4.2;5.1;5.8;6.4;6.8;7.5;8.3\n\
";

/// Parse [`CRUISER_42_CSV`].
pub fn cruiser_42() -> PolarResult<PolarTable> {
    load_polar_reader(Cursor::new(CRUISER_42_CSV), DEFAULT_DELIMITER)
}
