mod flight_logs;
