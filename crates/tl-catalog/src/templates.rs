//! SQL statement templates
//!
//! Templates are minijinja sources rendered once at catalog construction.
//! `{{ log_data }}`, `{{ song_data }}`, `{{ log_jsonpath }}`, `{{ iam_role }}`
//! and `{{ region }}` come from configuration; `{{ surrogate_key }}`,
//! `{{ distkey }}`, `{{ sortkey }}`, `{{ epoch_to_timestamp }}` and
//! `{{ weekday_part }}` are dialect fragments. The logical schema is
//! identical across dialects; only physical layout hints and the bulk-load
//! mechanism differ.

// DROP

pub(crate) const TABLE_DROP: &str = "DROP TABLE IF EXISTS {{ table }}";

/// DuckDB only: the fact-table surrogate key draws from this sequence
pub(crate) const SEQUENCE_DROP: &str = "DROP SEQUENCE IF EXISTS songplay_id_seq";

// CREATE

pub(crate) const SEQUENCE_CREATE: &str = "CREATE SEQUENCE IF NOT EXISTS songplay_id_seq";

pub(crate) const STAGING_EVENTS_CREATE: &str = "\
CREATE TABLE IF NOT EXISTS staging_events (
    artist        varchar,
    auth          varchar,
    firstName     varchar,
    gender        varchar(1),
    itemInSession int,
    lastName      varchar,
    length        numeric,
    level         varchar,
    location      varchar,
    method        varchar,
    page          varchar,
    registration  varchar,
    sessionId     int,
    song          varchar,
    status        int,
    ts            bigint,
    userAgent     varchar,
    userId        int
)";

pub(crate) const STAGING_SONGS_CREATE: &str = "\
CREATE TABLE IF NOT EXISTS staging_songs (
    artist_id        varchar,
    artist_latitude  numeric,
    artist_location  varchar,
    artist_longitude numeric,
    artist_name      varchar,
    duration         numeric,
    num_songs        int,
    song_id          varchar,
    title            varchar,
    year             int
)";

pub(crate) const SONGPLAYS_CREATE: &str = "\
CREATE TABLE IF NOT EXISTS songplays (
    songplay_id {{ surrogate_key }} PRIMARY KEY{{ distkey }},
    start_time  timestamp NOT NULL,
    user_id     int NOT NULL,
    level       varchar NOT NULL,
    song_id     varchar NOT NULL,
    artist_id   varchar NOT NULL,
    session_id  varchar NOT NULL,
    location    varchar NOT NULL,
    user_agent  varchar NOT NULL
){{ sortkey }}";

pub(crate) const USERS_CREATE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    user_id    int PRIMARY KEY{{ distkey }},
    first_name varchar NOT NULL,
    last_name  varchar NOT NULL,
    gender     varchar NOT NULL,
    level      varchar NOT NULL
){{ sortkey }}";

pub(crate) const SONGS_CREATE: &str = "\
CREATE TABLE IF NOT EXISTS songs (
    song_id   varchar PRIMARY KEY{{ distkey }},
    title     varchar NOT NULL,
    artist_id varchar NOT NULL,
    year      smallint NOT NULL,
    duration  numeric NOT NULL
){{ sortkey }}";

pub(crate) const ARTISTS_CREATE: &str = "\
CREATE TABLE IF NOT EXISTS artists (
    artist_id varchar PRIMARY KEY{{ distkey }},
    name      varchar NOT NULL,
    location  varchar,
    latitude  numeric,
    longitude numeric
){{ sortkey }}";

pub(crate) const TIME_CREATE: &str = "\
CREATE TABLE IF NOT EXISTS time (
    start_time timestamp PRIMARY KEY{{ distkey }},
    hour       smallint NOT NULL,
    day        smallint NOT NULL,
    week       smallint NOT NULL,
    month      smallint NOT NULL,
    year       smallint NOT NULL,
    weekday    smallint NOT NULL
){{ sortkey }}";

// COPY (staging loads)

/// Events are mapped through an explicit JSON-path specification.
pub(crate) const STAGING_EVENTS_COPY_REDSHIFT: &str = "\
COPY staging_events FROM '{{ log_data }}'
CREDENTIALS 'aws_iam_role={{ iam_role }}'
REGION '{{ region }}'
FORMAT AS JSON '{{ log_jsonpath }}'";

/// Song metadata field names line up with the staging DDL, so the schema
/// is auto-inferred.
pub(crate) const STAGING_SONGS_COPY_REDSHIFT: &str = "\
COPY staging_songs FROM '{{ song_data }}'
CREDENTIALS 'aws_iam_role={{ iam_role }}'
REGION '{{ region }}'
JSON 'auto'";

/// The explicit target-column mapping plays the role the JSON-path
/// specification plays on Redshift.
pub(crate) const STAGING_EVENTS_LOAD_DUCKDB: &str = "\
INSERT INTO staging_events (
    artist, auth, firstName, gender, itemInSession, lastName, length,
    level, location, method, page, registration, sessionId, song,
    status, ts, userAgent, userId
)
SELECT artist, auth, firstName, gender, itemInSession, lastName, length,
       level, location, method, page, registration, sessionId, song,
       status, ts, userAgent, userId
FROM read_json('{{ log_data }}', format = 'auto')";

pub(crate) const STAGING_SONGS_LOAD_DUCKDB: &str = "\
INSERT INTO staging_songs (
    artist_id, artist_latitude, artist_location, artist_longitude,
    artist_name, duration, num_songs, song_id, title, year
)
SELECT artist_id, artist_latitude, artist_location, artist_longitude,
       artist_name, duration, num_songs, song_id, title, year
FROM read_json('{{ song_data }}', format = 'auto')";

// INSERT (final-table transforms)

/// Fact transform: second-precision start_time from the epoch-millisecond
/// ts, NextSong events only, inner join against song metadata on exact
/// (title, artist name, duration) equality. Events that do not match are
/// excluded.
pub(crate) const SONGPLAYS_INSERT: &str = "\
INSERT INTO songplays (start_time,
                       user_id,
                       level,
                       song_id,
                       artist_id,
                       location,
                       user_agent,
                       session_id)
SELECT e.start_time,
       e.userId AS user_id,
       e.level,
       s.song_id,
       s.artist_id,
       e.location,
       e.userAgent AS user_agent,
       e.sessionId AS session_id
FROM (
    SELECT {{ epoch_to_timestamp }} AS start_time, *
    FROM staging_events
    WHERE page = 'NextSong'
) e
JOIN staging_songs s
  ON e.song = s.title
 AND e.artist = s.artist_name
 AND e.length = s.duration";

/// User dimension: most-recent-timestamp-wins per user_id.
pub(crate) const USERS_INSERT: &str = "\
INSERT INTO users (user_id,
                   first_name,
                   last_name,
                   gender,
                   level)
WITH ranked_events AS (
    SELECT userId AS user_id,
           firstName AS first_name,
           lastName AS last_name,
           gender,
           level,
           ROW_NUMBER() OVER (PARTITION BY userId ORDER BY ts DESC) AS recency_rank
    FROM staging_events
    WHERE page = 'NextSong'
      AND userId IS NOT NULL
)
SELECT user_id,
       first_name,
       last_name,
       gender,
       level
FROM ranked_events
WHERE recency_rank = 1";

/// Song dimension, deduplicated by song_id so the declared primary key
/// holds even when staging metadata repeats a song with differing
/// non-key columns.
pub(crate) const SONGS_INSERT: &str = "\
INSERT INTO songs (song_id,
                   title,
                   artist_id,
                   year,
                   duration)
WITH ranked_songs AS (
    SELECT song_id,
           title,
           artist_id,
           year,
           duration,
           ROW_NUMBER() OVER (PARTITION BY song_id ORDER BY title) AS dup_rank
    FROM staging_songs
    WHERE song_id IS NOT NULL
)
SELECT song_id,
       title,
       artist_id,
       year,
       duration
FROM ranked_songs
WHERE dup_rank = 1";

/// Artist dimension, deduplicated by artist_id.
pub(crate) const ARTISTS_INSERT: &str = "\
INSERT INTO artists (artist_id,
                     name,
                     location,
                     longitude,
                     latitude)
WITH ranked_artists AS (
    SELECT artist_id,
           artist_name,
           artist_location,
           artist_longitude,
           artist_latitude,
           ROW_NUMBER() OVER (PARTITION BY artist_id ORDER BY artist_name) AS dup_rank
    FROM staging_songs
    WHERE song_id IS NOT NULL
)
SELECT artist_id,
       artist_name,
       artist_location,
       artist_longitude,
       artist_latitude
FROM ranked_artists
WHERE dup_rank = 1";

/// Time dimension: calendar decomposition of every distinct fact
/// start_time. Weekday is 0 = Sunday on both dialects.
pub(crate) const TIME_INSERT: &str = "\
INSERT INTO time (start_time,
                  hour,
                  day,
                  week,
                  month,
                  year,
                  weekday)
SELECT DISTINCT t.start_time,
       EXTRACT(HOUR FROM t.start_time),
       EXTRACT(DAY FROM t.start_time),
       EXTRACT(WEEK FROM t.start_time),
       EXTRACT(MONTH FROM t.start_time),
       EXTRACT(YEAR FROM t.start_time),
       EXTRACT({{ weekday_part }} FROM t.start_time)
FROM songplays t";
