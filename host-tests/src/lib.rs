//! Host-based scenario tests for the garage sentinel supervisor.
//! These tests run on the development machine, not on the ESP32: the whole
//! platform (clock, door line, wifi link, HTTP, storage) is scripted so
//! elapsed time and failures can be simulated without hardware or delays.
