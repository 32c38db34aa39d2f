//! Embedded sample day: ten addresses, fourteen packages, three trucks.
//!
//! Same layout as the on-disk files read with `--data-dir`:
//! `Address.csv`, `Distance_Matrix.csv`, `Package.csv`.

use fl_core::ClockTime;

pub const ADDRESS_FILE:  &str = "Address.csv";
pub const DISTANCE_FILE: &str = "Distance_Matrix.csv";
pub const PACKAGE_FILE:  &str = "Package.csv";

// index,label,address.  Row 0 is the hub.
pub const ADDRESS_CSV: &str = "\
0,Western Governors University,4001 South 700 East\n\
1,International Peace Gardens,1060 Dalton Ave S\n\
2,Sugar House Park,1330 2100 S\n\
3,Taylorsville-Bennion Heritage City Gov Off,1488 4800 S\n\
4,Salt Lake City Division of Health Services,177 W Price Ave\n\
5,South Salt Lake Public Works,195 W Oakland Ave\n\
6,Columbus Library,2530 S 500 E\n\
7,Cottonwood Regional Softball Complex,4300 S 1300 E\n\
8,Salt Lake County Mental Health,3148 S 1100 W\n\
9,City and County Building,410 S State St\n\
";

// Lower triangle, miles.  Upper cells are mirrored on load.
pub const DISTANCE_CSV: &str = "\
0.0\n\
7.2,0.0\n\
3.8,7.1,0.0\n\
11.0,6.4,9.2,0.0\n\
2.2,6.0,4.4,5.6,0.0\n\
3.5,4.8,2.8,6.9,1.9,0.0\n\
10.9,1.6,8.6,8.6,7.9,6.3,0.0\n\
8.6,2.8,6.3,4.0,5.1,4.3,4.0,0.0\n\
7.6,4.8,5.3,11.1,7.5,4.5,4.2,7.7,0.0\n\
2.8,6.3,1.6,7.3,2.6,1.5,8.0,9.3,4.8,0.0\n\
";

// id,address,city,state,zip,deadline,weight,notes
pub const PACKAGE_CSV: &str = "\
1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21,\n\
2,2530 S 500 E,Salt Lake City,UT,84106,EOD,44,\n\
3,1330 2100 S,Salt Lake City,UT,84106,EOD,2,\n\
4,1060 Dalton Ave S,Salt Lake City,UT,84104,EOD,4,\n\
5,1488 4800 S,Salt Lake City,UT,84123,EOD,5,\n\
6,3148 S 1100 W,Salt Lake City,UT,84119,10:30 AM,88,Delayed on flight---will not arrive to depot until 9:05 am\n\
7,177 W Price Ave,Salt Lake City,UT,84115,EOD,8,\n\
8,4300 S 1300 E,Millcreek,UT,84117,EOD,9,\n\
9,410 S State St,Salt Lake City,UT,84111,EOD,2,Wrong address listed\n\
10,2530 S 500 E,Salt Lake City,UT,84106,EOD,1,\n\
11,1330 2100 S,Salt Lake City,UT,84106,EOD,1,\n\
12,3148 S 1100 W,Salt Lake City,UT,84119,EOD,1,Delayed on flight---will not arrive to depot until 9:05 am\n\
13,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,2,\n\
14,410 S State St,Salt Lake City,UT,84111,EOD,5,\n\
";

/// `(truck id, package ids, dispatch time)`.  Truck 2 waits for the address
/// correction, truck 3 for the delayed flight.
pub const TRUCKS: &[(u32, &[u32], ClockTime)] = &[
    (1, &[1, 3, 4, 7, 11, 13], ClockTime::from_hms(8, 0, 0)),
    (2, &[9, 14, 5, 8],        ClockTime::from_hms(10, 20, 0)),
    (3, &[2, 6, 10, 12],       ClockTime::from_hms(9, 5, 0)),
];
