// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

// Table names follow the domain's capitalized names; Rust-side identifiers
// are snake_case and mapped with `sql_name`.

diesel::table! {
    #[sql_name = "Tournament"]
    tournaments (tournament_id) {
        tournament_id -> BigInt,
        name -> Text,
        date -> Date,
    }
}

diesel::table! {
    #[sql_name = "Round"]
    rounds (round_id) {
        round_id -> BigInt,
        tournament_id -> BigInt,
        round_number -> Integer,
    }
}

diesel::table! {
    #[sql_name = "Matchup"]
    matchups (matchup_id) {
        matchup_id -> BigInt,
        round_id -> BigInt,
    }
}

diesel::table! {
    #[sql_name = "Team"]
    teams (team_id) {
        team_id -> BigInt,
        name -> Text,
    }
}

diesel::table! {
    #[sql_name = "Debater"]
    debaters (debater_id) {
        debater_id -> BigInt,
        name -> Text,
        experience_level -> Text,
        team_id -> Nullable<BigInt>,
    }
}

diesel::table! {
    #[sql_name = "Role"]
    speaking_roles (role_id) {
        role_id -> BigInt,
        role_name -> Text,
    }
}

diesel::table! {
    #[sql_name = "Judge"]
    judges (judge_id) {
        judge_id -> BigInt,
        name -> Text,
        experience_level -> Text,
    }
}

diesel::table! {
    #[sql_name = "Performance"]
    performances (performance_id) {
        performance_id -> BigInt,
        debater_id -> BigInt,
        round_id -> BigInt,
        speaks -> Double,
        feedback -> Nullable<Text>,
    }
}

diesel::table! {
    #[sql_name = "User"]
    users (user_id) {
        user_id -> BigInt,
        name -> Text,
        role -> Text,
    }
}

diesel::table! {
    #[sql_name = "Tournament_User"]
    tournament_users (tournament_id, user_id) {
        tournament_id -> BigInt,
        user_id -> BigInt,
    }
}

// Views. Diesel requires a key; these are the grouping columns.

diesel::table! {
    #[sql_name = "TournamentDetails"]
    tournament_details (tournament_id) {
        tournament_id -> BigInt,
        #[sql_name = "TournamentName"]
        tournament_name -> Text,
        #[sql_name = "TournamentDate"]
        tournament_date -> Date,
        #[sql_name = "NumberOfRounds"]
        number_of_rounds -> BigInt,
    }
}

diesel::table! {
    #[sql_name = "DebaterPerformanceOverview"]
    debater_performance_overview (debater_id, tournament_id) {
        debater_id -> BigInt,
        #[sql_name = "DebaterName"]
        debater_name -> Text,
        tournament_id -> BigInt,
        #[sql_name = "TournamentName"]
        tournament_name -> Text,
        #[sql_name = "AvgSpeaks"]
        avg_speaks -> Double,
    }
}

diesel::joinable!(rounds -> tournaments (tournament_id));
diesel::joinable!(matchups -> rounds (round_id));
diesel::joinable!(debaters -> teams (team_id));
diesel::joinable!(performances -> debaters (debater_id));
diesel::joinable!(performances -> rounds (round_id));
diesel::joinable!(tournament_users -> tournaments (tournament_id));
diesel::joinable!(tournament_users -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    tournaments,
    rounds,
    matchups,
    teams,
    debaters,
    speaking_roles,
    judges,
    performances,
    users,
    tournament_users,
);
