use crate::models::Airport;

type AirportRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
);

const fn ref_airport(
    iata: &'static str,
    icao: &'static str,
    name: &'static str,
    city: &'static str,
    country: &'static str,
    latitude: f64,
    longitude: f64,
) -> AirportRow {
    (iata, icao, name, city, country, latitude, longitude)
}

// Major hubs. Several cities have more than one (New York, London, Paris, Tokyo).
const AIRPORTS: &[AirportRow] = &[
    ref_airport("JFK", "KJFK", "John F. Kennedy International", "New York", "USA", 40.6413, -73.7781),
    ref_airport("LGA", "KLGA", "LaGuardia Airport", "New York", "USA", 40.7769, -73.8740),
    ref_airport("EWR", "KEWR", "Newark Liberty International", "Newark", "USA", 40.6895, -74.1745),
    ref_airport("LAX", "KLAX", "Los Angeles International", "Los Angeles", "USA", 33.9425, -118.4081),
    ref_airport("SFO", "KSFO", "San Francisco International", "San Francisco", "USA", 37.6213, -122.3790),
    ref_airport("ORD", "KORD", "O'Hare International", "Chicago", "USA", 41.9742, -87.9073),
    ref_airport("MIA", "KMIA", "Miami International", "Miami", "USA", 25.7959, -80.2870),
    ref_airport("BOS", "KBOS", "Boston Logan International", "Boston", "USA", 42.3656, -71.0096),
    ref_airport("ATL", "KATL", "Hartsfield-Jackson Atlanta", "Atlanta", "USA", 33.6407, -84.4277),
    ref_airport("DFW", "KDFW", "Dallas/Fort Worth International", "Dallas", "USA", 32.8998, -97.0403),
    ref_airport("SEA", "KSEA", "Seattle-Tacoma International", "Seattle", "USA", 47.4502, -122.3088),
    ref_airport("YYZ", "CYYZ", "Toronto Pearson International", "Toronto", "Canada", 43.6777, -79.6248),
    ref_airport("YVR", "CYVR", "Vancouver International", "Vancouver", "Canada", 49.1967, -123.1815),
    ref_airport("MEX", "MMMX", "Mexico City International", "Mexico City", "Mexico", 19.4361, -99.0719),
    ref_airport("LHR", "EGLL", "London Heathrow", "London", "UK", 51.4700, -0.4543),
    ref_airport("LGW", "EGKK", "London Gatwick", "London", "UK", 51.1537, -0.1821),
    ref_airport("CDG", "LFPG", "Charles de Gaulle", "Paris", "France", 49.0097, 2.5479),
    ref_airport("ORY", "LFPO", "Paris Orly", "Paris", "France", 48.7233, 2.3795),
    ref_airport("FRA", "EDDF", "Frankfurt Airport", "Frankfurt", "Germany", 50.0379, 8.5622),
    ref_airport("MUC", "EDDM", "Munich Airport", "Munich", "Germany", 48.3537, 11.7750),
    ref_airport("AMS", "EHAM", "Amsterdam Schiphol", "Amsterdam", "Netherlands", 52.3105, 4.7683),
    ref_airport("MAD", "LEMD", "Madrid Barajas", "Madrid", "Spain", 40.4983, -3.5676),
    ref_airport("BCN", "LEBL", "Barcelona El Prat", "Barcelona", "Spain", 41.2974, 2.0833),
    ref_airport("FCO", "LIRF", "Rome Fiumicino", "Rome", "Italy", 41.8003, 12.2389),
    ref_airport("ZRH", "LSZH", "Zurich Airport", "Zurich", "Switzerland", 47.4647, 8.5492),
    ref_airport("VIE", "LOWW", "Vienna International", "Vienna", "Austria", 48.1103, 16.5697),
    ref_airport("CPH", "EKCH", "Copenhagen Airport", "Copenhagen", "Denmark", 55.6180, 12.6560),
    ref_airport("DUB", "EIDW", "Dublin Airport", "Dublin", "Ireland", 53.4264, -6.2499),
    ref_airport("IST", "LTFM", "Istanbul Airport", "Istanbul", "Turkey", 41.2753, 28.7519),
    ref_airport("DXB", "OMDB", "Dubai International", "Dubai", "UAE", 25.2532, 55.3657),
    ref_airport("HKG", "VHHH", "Hong Kong International", "Hong Kong", "Hong Kong", 22.3080, 113.9185),
    ref_airport("SIN", "WSSS", "Singapore Changi", "Singapore", "Singapore", 1.3644, 103.9915),
    ref_airport("NRT", "RJAA", "Narita International", "Tokyo", "Japan", 35.7720, 140.3929),
    ref_airport("HND", "RJTT", "Tokyo Haneda", "Tokyo", "Japan", 35.5494, 139.7798),
    ref_airport("ICN", "RKSI", "Incheon International", "Seoul", "South Korea", 37.4691, 126.4505),
    ref_airport("PEK", "ZBAA", "Beijing Capital International", "Beijing", "China", 40.0799, 116.6031),
    ref_airport("PVG", "ZSPD", "Shanghai Pudong International", "Shanghai", "China", 31.1443, 121.8083),
    ref_airport("BKK", "VTBS", "Suvarnabhumi Airport", "Bangkok", "Thailand", 13.6900, 100.7501),
    ref_airport("KUL", "WMKK", "Kuala Lumpur International", "Kuala Lumpur", "Malaysia", 2.7456, 101.7099),
    ref_airport("DEL", "VIDP", "Indira Gandhi International", "New Delhi", "India", 28.5562, 77.1000),
    ref_airport("BOM", "VABB", "Chhatrapati Shivaji International", "Mumbai", "India", 19.0896, 72.8656),
    ref_airport("SYD", "YSSY", "Sydney Kingsford Smith", "Sydney", "Australia", -33.9399, 151.1753),
    ref_airport("MEL", "YMML", "Melbourne Airport", "Melbourne", "Australia", -37.6690, 144.8410),
    ref_airport("AKL", "NZAA", "Auckland Airport", "Auckland", "New Zealand", -37.0082, 174.7850),
    ref_airport("DOH", "OTHH", "Hamad International", "Doha", "Qatar", 25.2731, 51.6081),
    ref_airport("GRU", "SBGR", "São Paulo–Guarulhos International", "São Paulo", "Brazil", -23.4356, -46.4731),
    ref_airport("EZE", "SAEZ", "Ministro Pistarini International", "Buenos Aires", "Argentina", -34.8222, -58.5358),
    ref_airport("JNB", "FAOR", "O.R. Tambo International", "Johannesburg", "South Africa", -26.1367, 28.2411),
    ref_airport("CAI", "HECA", "Cairo International", "Cairo", "Egypt", 30.1219, 31.4056),
];

pub fn reference_airports() -> Vec<Airport> {
    AIRPORTS
        .iter()
        .map(
            |&(iata, icao, name, city, country, latitude, longitude)| Airport {
                iata: iata.to_string(),
                icao: icao.to_string(),
                name: name.to_string(),
                city: city.to_string(),
                country: country.to_string(),
                latitude,
                longitude,
            },
        )
        .collect()
}
