//! Route documents used across the integration tests.

/// Two track segments, plus a route and waypoints that must be ignored.
pub const GPX_TRACK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="route-scout-tests" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="10.0" lon="10.0"><name>Ignored</name></wpt>
  <rte>
    <rtept lat="20.0" lon="20.0"></rtept>
  </rte>
  <trk>
    <name>Town Lake Loop</name>
    <trkseg>
      <trkpt lat="30.2672" lon="-97.7431"><ele>149.0</ele></trkpt>
      <trkpt lat="30.2650" lon="-97.7500"><ele>150.0</ele></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="30.2600" lon="-97.7600"></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

/// A route and waypoints, no tracks.
pub const GPX_ROUTE_ONLY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="route-scout-tests" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="10.0" lon="10.0"></wpt>
  <rte>
    <rtept lat="30.1" lon="-97.1"></rtept>
    <rtept lat="30.2" lon="-97.2"></rtept>
    <rtept lat="30.3" lon="-97.3"></rtept>
  </rte>
</gpx>
"#;

/// Two standalone waypoints and nothing else.
pub const GPX_WAYPOINTS_ONLY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="route-scout-tests" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="30.2672" lon="-97.7431"><name>Start</name></wpt>
  <wpt lat="30.5083" lon="-97.6789"><name>End</name></wpt>
</gpx>
"#;

pub const GPX_EMPTY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="route-scout-tests" xmlns="http://www.topografix.com/GPX/1/1">
</gpx>
"#;

pub const GPX_MALFORMED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="route-scout-tests">
  <trk><trkseg><trkpt lat="30.0" lon="-97.0">
"#;

/// Coordinates spread across nested folders and a multi-geometry.
pub const KML_NESTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Hill Country</name>
    <Folder>
      <Placemark>
        <LineString>
          <coordinates>
            -97.7431,30.2672,149 -97.7500,30.2650,150
          </coordinates>
        </LineString>
      </Placemark>
      <Folder>
        <Placemark>
          <MultiGeometry>
            <Point><coordinates>-97.7600,30.2600</coordinates></Point>
            <LineString><coordinates>-97.8000,30.2500,0
-97.8100,30.2400,0</coordinates></LineString>
          </MultiGeometry>
        </Placemark>
      </Folder>
    </Folder>
    <Placemark>
      <Point><coordinates>-98.0000,30.0000</coordinates></Point>
    </Placemark>
  </Document>
</kml>
"#;

pub const KML_EMPTY_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document><name>Nothing here</name></Document>
</kml>
"#;

pub const KML_MALFORMED: &str = r#"<kml><Document><Placemark></Document></kml>"#;

/// A straight GPX track of `n` points heading north from downtown Austin.
pub fn long_gpx_track(n: usize) -> String {
    let points: String = (0..n)
        .map(|i| {
            format!(
                "<trkpt lat=\"{:.6}\" lon=\"-97.743100\"></trkpt>\n",
                30.0 + i as f64 * 0.0001
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\"?>\n<gpx version=\"1.1\" creator=\"route-scout-tests\">\n<trk><trkseg>\n{}</trkseg></trk>\n</gpx>\n",
        points
    )
}
